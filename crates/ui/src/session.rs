//! Viewer session state
//!
//! Owns everything that can trigger a highlight recomputation: the lazily
//! arriving page layouts, the extraction-derived terms, the ad-hoc search
//! text, and the zoom factor. Every change rebuilds the snapshot from
//! scratch, synchronously, and replaces it as a whole; readers holding the
//! previous `Arc` keep a consistent view and the newest recomputation always
//! wins.

use std::sync::Arc;

use policy_viewer_core::{
    locate, locate_first_of, rebuild, DocumentLayout, ExtractionResult, HighlightSnapshot, Page,
    TermSet,
};

use crate::zoom::{self, DEFAULT_ZOOM};

/// Host-facing state for one open document
pub struct ViewerSession {
    layout: DocumentLayout,
    field_terms: Vec<String>,
    issue_date_variants: Vec<String>,
    expiration_date_variants: Vec<String>,
    search_text: String,
    zoom: f32,
    snapshot: Arc<HighlightSnapshot>,
}

impl ViewerSession {
    /// Create a session with no document loaded
    pub fn new() -> Self {
        Self {
            layout: DocumentLayout::default(),
            field_terms: Vec::new(),
            issue_date_variants: Vec::new(),
            expiration_date_variants: Vec::new(),
            search_text: String::new(),
            zoom: DEFAULT_ZOOM,
            snapshot: Arc::new(HighlightSnapshot::default()),
        }
    }

    /// Reset for a newly opened document with a known page count
    ///
    /// Pages register later, one by one, as their text layout completes.
    pub fn open_document(&mut self, page_count: usize) {
        self.layout = DocumentLayout::new(page_count);
        self.recompute();
    }

    /// Register a page whose text layout just completed
    pub fn page_ready(&mut self, page: Page) {
        self.layout.set_page(page);
        self.recompute();
    }

    /// Replace the extraction-derived terms and date variants
    pub fn set_extraction(&mut self, result: &ExtractionResult) {
        self.field_terms = result.field_terms();
        self.issue_date_variants = result.issue_date_variants();
        self.expiration_date_variants = result.expiration_date_variants();
        self.recompute();
    }

    /// Parse and apply an extraction response
    ///
    /// Malformed payloads are logged and leave the session unchanged.
    pub fn apply_extraction_json(&mut self, json: &str) -> bool {
        match ExtractionResult::from_json(json) {
            Ok(result) => {
                self.set_extraction(&result);
                true
            }
            Err(err) => {
                log::warn!("ignoring malformed extraction payload: {err}");
                false
            }
        }
    }

    /// Update the ad-hoc search text; called on every keystroke
    pub fn set_search_text(&mut self, text: &str) {
        if self.search_text != text {
            self.search_text = text.to_string();
            self.recompute();
        }
    }

    /// Current search box contents
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Current zoom factor
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set an explicit zoom factor; non-positive values are rejected
    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom > 0.0 && (self.zoom - zoom).abs() > f32::EPSILON {
            self.zoom = zoom;
            self.recompute();
        }
    }

    /// Zoom one toolbar step in
    pub fn zoom_in(&mut self) {
        let zoom = zoom::zoom_in(self.zoom);
        self.set_zoom(zoom);
    }

    /// Zoom one toolbar step out
    pub fn zoom_out(&mut self) {
        let zoom = zoom::zoom_out(self.zoom);
        self.set_zoom(zoom);
    }

    /// Total page count of the open document
    pub fn page_count(&self) -> usize {
        self.layout.page_count()
    }

    /// Current highlight snapshot
    ///
    /// Cheap to clone and safe to keep while the session mutates; drawing
    /// scales each stored rectangle by the current zoom.
    pub fn snapshot(&self) -> Arc<HighlightSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Page to scroll to for a field value click or search submission
    pub fn scroll_to_term(&self, term: &str) -> Option<usize> {
        locate(&self.snapshot, term)
    }

    /// Page showing the issue date, trying each recorded spelling in order
    pub fn scroll_to_issue_date(&self) -> Option<usize> {
        locate_first_of(
            &self.snapshot,
            self.issue_date_variants.iter().map(String::as_str),
        )
    }

    /// Page showing the expiration date, trying each recorded spelling
    pub fn scroll_to_expiration_date(&self) -> Option<usize> {
        locate_first_of(
            &self.snapshot,
            self.expiration_date_variants.iter().map(String::as_str),
        )
    }

    /// Clamp a 1-based toolbar page number to a page index
    pub fn scroll_to_page(&self, page_number: usize) -> Option<usize> {
        if page_number == 0 || self.layout.page_count() == 0 {
            return None;
        }
        Some((page_number - 1).min(self.layout.page_count() - 1))
    }

    fn recompute(&mut self) {
        let search = self.search_text.trim();
        let terms = TermSet::new(&self.field_terms, (!search.is_empty()).then_some(search));
        self.snapshot = Arc::new(rebuild(&self.layout, &terms, self.zoom));
    }
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new()
    }
}
