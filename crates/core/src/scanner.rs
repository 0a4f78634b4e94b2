//! Fragment window scanning
//!
//! A term may be split across several consecutive fragments, so matching
//! slides a bounded window over the page: at each start position the window's
//! fragments are concatenated in normalized form and searched for the term.
//! A term whose rendered span exceeds the window can not be found; that is an
//! accepted limitation, not an error.

use crate::normalize::NormalizedFragment;

/// Maximum number of consecutive fragments a single match may span
pub const WINDOW_SIZE: usize = 6;

/// A window whose concatenated normalized text contains the term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMatch {
    /// Page-relative index of the first fragment of the window
    pub window_start: usize,

    /// Number of fragments in the window
    pub window_len: usize,

    /// Match start in characters within the window's concatenated normalized
    /// text
    pub match_start: usize,

    /// Match length in normalized characters
    pub match_len: usize,
}

/// Iterator over candidate window matches for one term on one page
///
/// Window starts advance one fragment at a time from the beginning of the
/// page; the first window containing the term yields a candidate. A consumer
/// that rejects a candidate (offset mapping failed) pulls the next one, which
/// resumes scanning at the following start position.
#[derive(Debug)]
pub struct WindowScan<'a> {
    fragments: &'a [NormalizedFragment],
    term: &'a str,
    term_char_len: usize,
    next_start: usize,
}

impl<'a> WindowScan<'a> {
    /// Scan `fragments` for `term`, which must already be normalized and
    /// non-empty
    pub fn new(fragments: &'a [NormalizedFragment], term: &'a str) -> Self {
        debug_assert!(!term.is_empty(), "empty terms are filtered before scanning");
        Self {
            fragments,
            term,
            term_char_len: term.chars().count(),
            next_start: 0,
        }
    }
}

impl Iterator for WindowScan<'_> {
    type Item = WindowMatch;

    fn next(&mut self) -> Option<WindowMatch> {
        while self.next_start < self.fragments.len() {
            let start = self.next_start;
            self.next_start += 1;

            let end = (start + WINDOW_SIZE).min(self.fragments.len());
            let window = &self.fragments[start..end];

            let mut combined = String::new();
            for fragment in window {
                combined.push_str(fragment.as_str());
            }

            let Some(byte_offset) = combined.find(self.term) else {
                continue;
            };

            return Some(WindowMatch {
                window_start: start,
                window_len: window.len(),
                match_start: combined[..byte_offset].chars().count(),
                match_len: self.term_char_len,
            });
        }

        None
    }
}
