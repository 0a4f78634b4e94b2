//! Normalized-to-raw offset mapping
//!
//! A window match carries offsets in the window's concatenated normalized
//! text. Before geometry can be resolved those offsets must be translated
//! into (fragment, raw character offset) pairs bounding the match.

use crate::normalize::NormalizedFragment;
use crate::scanner::WindowMatch;

/// Boundaries of a match in raw fragment text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanBounds {
    /// Page-relative index of the fragment containing the match start
    pub start_fragment: usize,

    /// Raw character offset of the match start within its fragment
    pub start_offset: usize,

    /// Page-relative index of the fragment containing the match end
    pub end_fragment: usize,

    /// Raw character offset one past the last matched character
    pub end_offset: usize,
}

/// Offset bookkeeping failures
///
/// A failed mapping discards the match; the scanner then continues as if the
/// window had not matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// The match start is not contained in any window fragment
    #[error("match start not contained in any window fragment")]
    StartNotFound,

    /// The match end is not contained in any window fragment
    #[error("match end not contained in any window fragment")]
    EndNotFound,
}

/// Map a window match back to raw text boundaries
///
/// Walks the window's fragments in order, accumulating normalized length;
/// the fragment whose cumulative range contains the match start becomes the
/// start fragment, symmetrically for the match end. `window` must be the
/// fragment run the candidate was produced from.
pub fn map_span(
    window: &[NormalizedFragment],
    candidate: WindowMatch,
) -> Result<SpanBounds, MapError> {
    if candidate.match_len == 0 {
        return Err(MapError::EndNotFound);
    }

    let match_end = candidate.match_start + candidate.match_len;

    let mut cursor = 0;
    let mut start = None;
    let mut end = None;

    for (offset_in_window, fragment) in window.iter().enumerate() {
        let span_len = fragment.char_len();

        if start.is_none()
            && candidate.match_start >= cursor
            && candidate.match_start < cursor + span_len
        {
            let raw = fragment
                .raw_start(candidate.match_start - cursor)
                .ok_or(MapError::StartNotFound)?;
            start = Some((candidate.window_start + offset_in_window, raw));
        }

        if end.is_none() && match_end <= cursor + span_len {
            let raw = fragment
                .raw_end(match_end - cursor - 1)
                .ok_or(MapError::EndNotFound)?;
            end = Some((candidate.window_start + offset_in_window, raw));
            break;
        }

        cursor += span_len;
    }

    let (start_fragment, start_offset) = start.ok_or(MapError::StartNotFound)?;
    let (end_fragment, end_offset) = end.ok_or(MapError::EndNotFound)?;

    Ok(SpanBounds {
        start_fragment,
        start_offset,
        end_fragment,
        end_offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments(texts: &[&str]) -> Vec<NormalizedFragment> {
        texts.iter().map(|text| NormalizedFragment::new(text)).collect()
    }

    fn candidate(window_start: usize, match_start: usize, match_len: usize) -> WindowMatch {
        WindowMatch {
            window_start,
            window_len: 0,
            match_start,
            match_len,
        }
    }

    #[test]
    fn test_span_within_single_fragment() {
        let window = fragments(&["The policy number is PN-1234"]);
        let bounds = map_span(&window, candidate(0, 17, 7)).expect("mapping expected");

        // "PN-1234" starts at raw character 21
        assert_eq!(
            bounds,
            SpanBounds {
                start_fragment: 0,
                start_offset: 21,
                end_fragment: 0,
                end_offset: 28,
            }
        );
    }

    #[test]
    fn test_span_across_fragments() {
        let window = fragments(&["Policy", "holder: ", "Jane Doe"]);
        let bounds = map_span(&window, candidate(0, 0, 20)).expect("mapping expected");

        assert_eq!(bounds.start_fragment, 0);
        assert_eq!(bounds.start_offset, 0);
        assert_eq!(bounds.end_fragment, 2);
        // "Jane Doe" ends at raw character 8 despite its internal space
        assert_eq!(bounds.end_offset, 8);
    }

    #[test]
    fn test_window_base_offsets_fragment_indices() {
        let window = fragments(&["needle"]);
        let bounds = map_span(&window, candidate(3, 0, 6)).expect("mapping expected");

        assert_eq!(bounds.start_fragment, 3);
        assert_eq!(bounds.end_fragment, 3);
    }

    #[test]
    fn test_internal_whitespace_shifts_raw_offsets() {
        // Normalized "issued:15june" — the match "15june" starts at
        // normalized 7 but raw 9 because of the doubled spaces.
        let window = fragments(&["Issued:  15  June"]);
        let bounds = map_span(&window, candidate(0, 7, 6)).expect("mapping expected");

        assert_eq!(bounds.start_offset, 9);
        assert_eq!(bounds.end_offset, 17);
    }

    #[test]
    fn test_start_in_later_fragment() {
        let window = fragments(&["header ", "total: 42"]);
        let bounds = map_span(&window, candidate(0, 6, 8)).expect("mapping expected");

        assert_eq!(bounds.start_fragment, 1);
        assert_eq!(bounds.start_offset, 0);
        assert_eq!(bounds.end_fragment, 1);
        assert_eq!(bounds.end_offset, 9);
    }

    #[test]
    fn test_match_beyond_window_fails() {
        let window = fragments(&["short"]);

        assert_eq!(map_span(&window, candidate(0, 2, 10)), Err(MapError::EndNotFound));
        assert_eq!(map_span(&window, candidate(0, 9, 2)), Err(MapError::StartNotFound));
    }

    #[test]
    fn test_empty_window_fails() {
        let window = fragments(&[]);

        assert_eq!(map_span(&window, candidate(0, 0, 1)), Err(MapError::StartNotFound));
    }
}
