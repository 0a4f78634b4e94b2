//! Active term set assembly
//!
//! Field terms keep their input order and the ad-hoc search term, if any, is
//! appended last so field highlights take precedence downstream. Empty terms
//! are discarded and spellings that normalize identically collapse into one
//! entry, first spelling wins.

use crate::normalize::normalize;

/// One deduplicated term scheduled for highlighting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermEntry {
    original: String,
    normalized: String,
}

impl TermEntry {
    /// First spelling seen for this term; tags the resolved rectangles
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Normalized form used for matching
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

/// Deduplicated, ordered collection of highlight terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet {
    entries: Vec<TermEntry>,
}

impl TermSet {
    /// Assemble the active term set from field terms and the optional ad-hoc
    /// search term
    pub fn new<S: AsRef<str>>(field_terms: &[S], search_term: Option<&str>) -> Self {
        let mut set = Self::default();

        for term in field_terms {
            set.push(term.as_ref());
        }
        if let Some(term) = search_term {
            set.push(term);
        }

        set
    }

    fn push(&mut self, term: &str) {
        let original = term.trim();
        if original.is_empty() {
            return;
        }

        let normalized = normalize(original);
        if normalized.is_empty() {
            return;
        }
        if self.entries.iter().any(|entry| entry.normalized == normalized) {
            return;
        }

        self.entries.push(TermEntry {
            original: original.to_string(),
            normalized,
        });
    }

    /// Entries in scan order
    pub fn entries(&self) -> &[TermEntry] {
        &self.entries
    }

    /// Iterate entries in scan order
    pub fn iter(&self) -> std::slice::Iter<'_, TermEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_terms_keep_input_order() {
        let set = TermSet::new(&["jane doe", "pn-1234", "acme insurance"], None);

        let originals: Vec<&str> = set.iter().map(TermEntry::original).collect();
        assert_eq!(originals, vec!["jane doe", "pn-1234", "acme insurance"]);
    }

    #[test]
    fn test_search_term_is_appended_last() {
        let set = TermSet::new(&["jane doe"], Some("deductible"));

        let originals: Vec<&str> = set.iter().map(TermEntry::original).collect();
        assert_eq!(originals, vec!["jane doe", "deductible"]);
    }

    #[test]
    fn test_empty_terms_are_discarded() {
        let set = TermSet::new(&["", "   ", "\t\n"], Some(""));

        assert!(set.is_empty());
    }

    #[test]
    fn test_dedup_by_normalized_form() {
        let set = TermSet::new(&["ABC", " a b c ", "abc"], None);

        assert_eq!(set.len(), 1);
        assert_eq!(set.entries()[0].original(), "ABC");
        assert_eq!(set.entries()[0].normalized(), "abc");
    }

    #[test]
    fn test_search_term_duplicating_a_field_term_collapses() {
        let set = TermSet::new(&["Jane Doe"], Some("jane doe"));

        assert_eq!(set.len(), 1);
        assert_eq!(set.entries()[0].original(), "Jane Doe");
    }

    #[test]
    fn test_terms_are_trimmed_for_tagging() {
        let set = TermSet::new(&["  PN-1234  "], None);

        assert_eq!(set.entries()[0].original(), "PN-1234");
    }
}
