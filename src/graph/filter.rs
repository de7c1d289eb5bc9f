//! Word selection before graph construction

use crate::core::Word;

/// Which input words become vertices
///
/// Words rejected by a filter are skipped silently; they are not errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordFilter {
    /// Keep only words of exactly this many characters
    pub length: Option<usize>,
    /// Drop words in which some letter repeats
    pub distinct_letters: bool,
}

impl WordFilter {
    /// Accept every word
    #[must_use]
    pub const fn none() -> Self {
        Self {
            length: None,
            distinct_letters: false,
        }
    }

    /// Words of `length` characters with no repeated letter
    ///
    /// A word with a repeated letter wastes alphabet space, so it can never be
    /// part of a clique that fills the alphabet.
    #[must_use]
    pub const fn for_length(length: usize) -> Self {
        Self {
            length: Some(length),
            distinct_letters: true,
        }
    }

    #[must_use]
    pub fn accepts(&self, word: &Word) -> bool {
        if self.length.is_some_and(|len| word.len() != len) {
            return false;
        }
        !(self.distinct_letters && word.has_repeated_letters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CaseNormalization;

    fn word(text: &str) -> Word {
        Word::new(text, CaseNormalization::Lower).unwrap()
    }

    #[test]
    fn none_accepts_everything() {
        let filter = WordFilter::none();
        assert!(filter.accepts(&word("a")));
        assert!(filter.accepts(&word("speed")));
    }

    #[test]
    fn length_filter() {
        let filter = WordFilter {
            length: Some(5),
            distinct_letters: false,
        };
        assert!(filter.accepts(&word("crane")));
        assert!(filter.accepts(&word("speed")));
        assert!(!filter.accepts(&word("cranes")));
    }

    #[test]
    fn for_length_rejects_repeats() {
        let filter = WordFilter::for_length(5);
        assert!(filter.accepts(&word("crane")));
        assert!(!filter.accepts(&word("speed")));
        assert!(!filter.accepts(&word("fig")));
    }
}
