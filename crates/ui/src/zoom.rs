//! Zoom controls for the viewer toolbar

/// Smallest zoom factor the toolbar allows
pub const MIN_ZOOM: f32 = 0.5;

/// Largest zoom factor the toolbar allows
pub const MAX_ZOOM: f32 = 3.0;

/// Zoom change per toolbar click
pub const ZOOM_STEP: f32 = 0.1;

/// Zoom factor a freshly opened document starts at
pub const DEFAULT_ZOOM: f32 = 1.2;

/// One step in, clamped to the toolbar maximum
pub fn zoom_in(zoom: f32) -> f32 {
    (zoom + ZOOM_STEP).min(MAX_ZOOM)
}

/// One step out, clamped to the toolbar minimum
pub fn zoom_out(zoom: f32) -> f32 {
    (zoom - ZOOM_STEP).max(MIN_ZOOM)
}

/// Percentage label shown next to the zoom buttons
pub fn zoom_percent_label(zoom: f32) -> String {
    format!("{}%", (zoom * 100.0).round() as i32)
}
