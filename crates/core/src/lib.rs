//! Policy Viewer Core Library
//!
//! Term-to-layout highlight resolution: given the paginated text fragments
//! produced by the rendering pipeline and the terms extracted from a policy
//! document, compute the page-local rectangles that visually cover the first
//! occurrence of every term, independent of the viewer's zoom level.

pub mod fields;
pub mod fragment;
pub mod geometry;
pub mod highlight;
pub mod locate;
pub mod normalize;
pub mod offsets;
pub mod scanner;
pub mod terms;

pub use fields::ExtractionResult;
pub use fragment::{DocumentLayout, Fragment, GeometryError, GeometryProvider, Page, Rect};
pub use geometry::resolve_span;
pub use highlight::{rebuild, HighlightRect, HighlightSnapshot};
pub use locate::{locate, locate_first_of};
pub use normalize::{normalize, NormalizedFragment};
pub use offsets::{map_span, MapError, SpanBounds};
pub use scanner::{WindowMatch, WindowScan, WINDOW_SIZE};
pub use terms::{TermEntry, TermSet};
