//! Policy Viewer UI Library
//!
//! Host-facing viewer state: zoom controls, the ad-hoc search input, and the
//! highlight snapshot lifecycle around the core resolution engine.

pub mod session;
pub mod zoom;

pub use session::ViewerSession;
pub use zoom::{zoom_in, zoom_out, zoom_percent_label, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
