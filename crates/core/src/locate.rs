//! Scroll target location
//!
//! Finds which page to scroll to for a field value click or a search
//! submission. Lookup is case-insensitive against the stored term tag, with
//! a normalized-form fallback so any spelling collapsed during term
//! deduplication still resolves.

use crate::highlight::HighlightSnapshot;
use crate::normalize::normalize;

/// Page owning the first rectangle tagged with `term`
pub fn locate(snapshot: &HighlightSnapshot, term: &str) -> Option<usize> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }

    let lowered = term.to_lowercase();
    if let Some(rect) = snapshot
        .rects()
        .iter()
        .find(|rect| rect.term.to_lowercase() == lowered)
    {
        return Some(rect.page_index);
    }

    let normalized = normalize(term);
    snapshot
        .rects()
        .iter()
        .find(|rect| normalize(&rect.term) == normalized)
        .map(|rect| rect.page_index)
}

/// Page of the first candidate spelling that resolves, in order
///
/// Used to scroll to whichever recorded spelling of a date actually appears
/// in the document.
pub fn locate_first_of<'a, I>(snapshot: &HighlightSnapshot, candidates: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .find_map(|candidate| locate(snapshot, candidate))
}
