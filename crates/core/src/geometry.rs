//! Geometry resolution
//!
//! Turns a mapped text span into page-local, zoom-invariant rectangles by
//! delegating to each fragment's geometry capability. A match wrapping onto
//! multiple visual lines produces one rectangle per line.

use crate::fragment::{GeometryError, Page, Rect};
use crate::offsets::SpanBounds;

/// Resolve the rectangles covering `bounds` on `page`
///
/// The start fragment contributes from the start offset to its end, interior
/// fragments contribute in full, and the end fragment contributes up to the
/// end offset. Every viewport rectangle is converted to page-local units at
/// zoom 1.0 by subtracting the page origin and dividing by `zoom`.
pub fn resolve_span(page: &Page, bounds: SpanBounds, zoom: f32) -> Result<Vec<Rect>, GeometryError> {
    let fragments = page.fragments();
    let (origin_left, origin_top) = page.origin();

    let mut rects = Vec::new();

    for index in bounds.start_fragment..=bounds.end_fragment {
        let fragment = fragments.get(index).ok_or_else(|| {
            GeometryError::Unsupported(format!("fragment {index} missing from page"))
        })?;

        let start = if index == bounds.start_fragment {
            bounds.start_offset
        } else {
            0
        };
        let end = if index == bounds.end_fragment {
            bounds.end_offset
        } else {
            fragment.char_len()
        };

        if start >= end {
            continue;
        }

        for rect in fragment.rects_for(start, end)? {
            rects.push(Rect::new(
                (rect.top - origin_top) / zoom,
                (rect.left - origin_left) / zoom,
                rect.width / zoom,
                rect.height / zoom,
            ));
        }
    }

    Ok(rects)
}
