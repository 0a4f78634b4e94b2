//! Text normalization for whitespace- and case-insensitive matching
//!
//! Terms and fragment text are normalized identically so that substring
//! comparison ignores whitespace and case. Normalization is lossy: match
//! offsets land in normalized space, so each fragment keeps a table mapping
//! every normalized character back to the raw character it came from.

/// Normalize text for matching: strip all Unicode whitespace, then lowercase
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// A fragment's normalized text plus its normalized-to-raw offset table
///
/// A raw character that lowercases to several characters maps them all back
/// to the same raw position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFragment {
    norm: String,
    raw_positions: Vec<usize>,
    raw_char_len: usize,
}

impl NormalizedFragment {
    /// Normalize `raw` and record the offset table
    pub fn new(raw: &str) -> Self {
        let mut norm = String::new();
        let mut raw_positions = Vec::new();
        let mut raw_char_len = 0;

        for (raw_pos, c) in raw.chars().enumerate() {
            raw_char_len = raw_pos + 1;
            if c.is_whitespace() {
                continue;
            }
            for lowered in c.to_lowercase() {
                norm.push(lowered);
                raw_positions.push(raw_pos);
            }
        }

        Self {
            norm,
            raw_positions,
            raw_char_len,
        }
    }

    /// Normalized text
    pub fn as_str(&self) -> &str {
        &self.norm
    }

    /// Length of the normalized text in characters
    pub fn char_len(&self) -> usize {
        self.raw_positions.len()
    }

    /// Length of the raw text in characters
    pub fn raw_char_len(&self) -> usize {
        self.raw_char_len
    }

    /// Raw character position of the normalized character at `index`
    pub fn raw_start(&self, index: usize) -> Option<usize> {
        self.raw_positions.get(index).copied()
    }

    /// Raw character position one past the normalized character at `index`
    pub fn raw_end(&self, index: usize) -> Option<usize> {
        self.raw_positions.get(index).map(|pos| pos + 1)
    }
}
