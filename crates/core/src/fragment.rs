//! Document text model for the highlight pipeline
//!
//! Pages and their text fragments are produced by the rendering pipeline once
//! a page finishes laying out text. The engine only reads them; renderer-owned
//! state is never mutated. Geometry stays behind a per-fragment capability so
//! the engine never depends on a concrete renderer.

use std::fmt;
use std::sync::Arc;

/// Axis-aligned rectangle
///
/// Used both for viewport-pixel rectangles coming back from a
/// [`GeometryProvider`] and for page-local, zoom-invariant rectangles stored
/// in the highlight snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Distance from the top edge of the coordinate space
    pub top: f32,

    /// Distance from the left edge of the coordinate space
    pub left: f32,

    /// Width of the rectangle
    pub width: f32,

    /// Height of the rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Scale all components by a zoom factor
    ///
    /// Converts a page-local zoom-1.0 rectangle into screen pixels for the
    /// current zoom level.
    pub fn scaled(&self, zoom: f32) -> Self {
        Self {
            top: self.top * zoom,
            left: self.left * zoom,
            width: self.width * zoom,
            height: self.height * zoom,
        }
    }
}

/// Failure modes of a fragment's geometry capability
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// The requested offsets do not fall within the fragment's text
    #[error("offset range {start}..{end} out of bounds for fragment of {len} chars")]
    OutOfRange {
        start: usize,
        end: usize,
        len: usize,
    },

    /// The provider cannot produce rectangles for this range
    #[error("unsupported range: {0}")]
    Unsupported(String),
}

/// Per-fragment capability translating a text sub-range into on-screen
/// rectangles.
///
/// Offsets are character positions into the fragment's raw text, `end`
/// exclusive. A range wrapping onto multiple visual lines yields one
/// rectangle per line, in viewport pixel units. Implementations report
/// out-of-range or unsupported requests as errors and must not panic.
pub trait GeometryProvider: Send + Sync {
    fn rects_for(&self, start: usize, end: usize) -> Result<Vec<Rect>, GeometryError>;
}

/// A unit of renderable text at a fixed position within one page
///
/// Fragments never span pages, never overlap, and their concatenation in
/// order reconstructs the page's visible text stream.
#[derive(Clone)]
pub struct Fragment {
    /// Raw text content, possibly containing whitespace
    text: String,

    /// Geometry capability for sub-ranges of the text
    geometry: Arc<dyn GeometryProvider>,
}

impl Fragment {
    /// Create a fragment from its raw text and geometry capability
    pub fn new(text: impl Into<String>, geometry: Arc<dyn GeometryProvider>) -> Self {
        Self {
            text: text.into(),
            geometry,
        }
    }

    /// Raw text content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the raw text in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Viewport rectangles covering the character range `start..end`
    pub fn rects_for(&self, start: usize, end: usize) -> Result<Vec<Rect>, GeometryError> {
        self.geometry.rects_for(start, end)
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fragment")
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

/// One page of the document
///
/// Carries the fragments in layout order plus the viewport-pixel origin of
/// the page container, which anchors the conversion into page-local units.
#[derive(Debug, Clone)]
pub struct Page {
    index: usize,
    origin_left: f32,
    origin_top: f32,
    fragments: Vec<Fragment>,
}

impl Page {
    /// Create a page from its zero-based index, container origin, and
    /// fragments in layout order
    pub fn new(index: usize, origin_left: f32, origin_top: f32, fragments: Vec<Fragment>) -> Self {
        Self {
            index,
            origin_left,
            origin_top,
            fragments,
        }
    }

    /// Zero-based page index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Viewport-pixel origin of the page container as `(left, top)`
    pub fn origin(&self) -> (f32, f32) {
        (self.origin_left, self.origin_top)
    }

    /// Fragments in layout order
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }
}

/// Lazily filled collection of page text layouts
///
/// The renderer announces the page count up front and registers each page
/// once its text layout completes. A registered page may be replaced
/// wholesale but its fragments are never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct DocumentLayout {
    pages: Vec<Option<Page>>,
}

impl DocumentLayout {
    /// Create a layout for a document with a known page count
    pub fn new(page_count: usize) -> Self {
        Self {
            pages: vec![None; page_count],
        }
    }

    /// Total number of pages in the document
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of pages whose text layout has been registered
    pub fn ready_count(&self) -> usize {
        self.pages.iter().filter(|page| page.is_some()).count()
    }

    /// Register a page whose text layout is complete
    ///
    /// Pages with an index beyond the announced count are ignored.
    pub fn set_page(&mut self, page: Page) {
        if let Some(slot) = self.pages.get_mut(page.index()) {
            *slot = Some(page);
        }
    }

    /// Registered page at `index`, if its layout has arrived
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index).and_then(Option::as_ref)
    }

    /// Registered pages in ascending index order
    pub fn ready_pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter_map(Option::as_ref)
    }
}
