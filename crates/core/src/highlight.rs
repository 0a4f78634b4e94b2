//! Highlight store rebuild
//!
//! Runs the scan -> map -> resolve pipeline for every active term and
//! collects the resulting rectangles into an immutable snapshot. The store is
//! always rebuilt from scratch; hosts replace the whole snapshot so readers
//! never observe a partially rebuilt list.
//!
//! Failure policy: an unmatched term is simply absent; a failed offset
//! mapping discards the match and scanning resumes at the next window start;
//! a geometry failure abandons the page for that term and scanning proceeds
//! to the next page. No failure terminates the recomputation.

use crate::fragment::{DocumentLayout, Page, Rect};
use crate::geometry::resolve_span;
use crate::normalize::NormalizedFragment;
use crate::offsets::map_span;
use crate::scanner::WindowScan;
use crate::terms::{TermEntry, TermSet};

/// Resolved geometry for one matched occurrence of one term
///
/// A match spanning a visual line break produces several rectangles sharing
/// the same term tag.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightRect {
    /// Original spelling of the term that produced this rectangle
    pub term: String,

    /// Zero-based index of the owning page
    pub page_index: usize,

    /// Page-local rectangle at zoom 1.0
    pub rect: Rect,
}

/// Immutable result of one highlight recomputation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightSnapshot {
    rects: Vec<HighlightRect>,
}

impl HighlightSnapshot {
    /// All resolved rectangles, field terms before the search term
    pub fn rects(&self) -> &[HighlightRect] {
        &self.rects
    }

    /// Rectangles belonging to one page, for drawing
    pub fn rects_for_page(&self, page_index: usize) -> impl Iterator<Item = &HighlightRect> {
        self.rects
            .iter()
            .filter(move |rect| rect.page_index == page_index)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Rebuild the highlight snapshot from scratch
///
/// Terms are processed independently in their input order; each term stops at
/// the first page whose scan, offset mapping, and geometry resolution all
/// succeed, so at most one page ever contributes rectangles per term.
/// Identical inputs always produce an identical snapshot.
pub fn rebuild(layout: &DocumentLayout, terms: &TermSet, zoom: f32) -> HighlightSnapshot {
    debug_assert!(zoom > 0.0, "zoom factors are positive");

    let pages: Vec<(&Page, Vec<NormalizedFragment>)> = layout
        .ready_pages()
        .map(|page| {
            let fragments = page
                .fragments()
                .iter()
                .map(|fragment| NormalizedFragment::new(fragment.text()))
                .collect();
            (page, fragments)
        })
        .collect();

    let mut rects = Vec::new();
    for entry in terms.iter() {
        resolve_term(entry, &pages, zoom, &mut rects);
    }

    HighlightSnapshot { rects }
}

/// Resolve the first occurrence of one term, appending its rectangles
fn resolve_term(
    entry: &TermEntry,
    pages: &[(&Page, Vec<NormalizedFragment>)],
    zoom: f32,
    out: &mut Vec<HighlightRect>,
) {
    for (page, fragments) in pages {
        for candidate in WindowScan::new(fragments, entry.normalized()) {
            let window =
                &fragments[candidate.window_start..candidate.window_start + candidate.window_len];

            let bounds = match map_span(window, candidate) {
                Ok(bounds) => bounds,
                Err(err) => {
                    log::debug!(
                        "discarding match for {:?} on page {}: {}",
                        entry.original(),
                        page.index(),
                        err
                    );
                    continue;
                }
            };

            match resolve_span(page, bounds, zoom) {
                Ok(resolved) => {
                    for rect in resolved {
                        out.push(HighlightRect {
                            term: entry.original().to_string(),
                            page_index: page.index(),
                            rect,
                        });
                    }
                    return;
                }
                Err(err) => {
                    log::warn!(
                        "dropping highlight for {:?} on page {}: {}",
                        entry.original(),
                        page.index(),
                        err
                    );
                    break;
                }
            }
        }
    }
}
