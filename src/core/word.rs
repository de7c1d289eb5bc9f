//! Word representation
//!
//! A Word stores its normalized text together with the letter set used for
//! overlap checks. The letter set is fixed at construction.

use super::letters::LetterSet;
use std::fmt;
use thiserror::Error;

/// How letter case is handled before the letter set is extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseNormalization {
    /// Fold to lowercase (default)
    #[default]
    Lower,
    /// Fold to uppercase
    Upper,
    /// Keep the text as given; `A` and `a` are different letters
    None,
}

impl CaseNormalization {
    /// Create a normalization mode from its name
    ///
    /// Supported names: "lower", "upper", "none".
    /// Defaults to lower if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "upper" => Self::Upper,
            "none" | "preserve" => Self::None,
            _ => Self::Lower,
        }
    }

    /// Apply this normalization to `text`
    ///
    /// Only ASCII letters are folded; anything else is left for `Word::new`
    /// to reject.
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Lower => text.to_ascii_lowercase(),
            Self::Upper => text.to_ascii_uppercase(),
            Self::None => text.to_string(),
        }
    }
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word contains invalid character {0:?}; only ASCII letters are allowed")]
    InvalidCharacter(char),
}

/// A word and its letter set
///
/// Anagrams share a letter set but remain distinct words.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: LetterSet,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - It contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use word_cliques::core::{CaseNormalization, Word};
    ///
    /// let word = Word::new("Fjord", CaseNormalization::Lower).unwrap();
    /// assert_eq!(word.text(), "fjord");
    ///
    /// assert!(Word::new("", CaseNormalization::Lower).is_err());
    /// assert!(Word::new("sh0rt", CaseNormalization::Lower).is_err());
    /// ```
    pub fn new(text: &str, case: CaseNormalization) -> Result<Self, WordError> {
        let text = case.apply(text);

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        match LetterSet::from_text(&text) {
            Some(letters) => Ok(Self { text, letters }),
            None => {
                let bad = text
                    .chars()
                    .find(|c| !c.is_ascii_alphabetic())
                    .unwrap_or_default();
                Err(WordError::InvalidCharacter(bad))
            }
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letter set
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Length in characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when some letter occurs more than once
    #[inline]
    #[must_use]
    pub fn has_repeated_letters(&self) -> bool {
        self.letters.len() != self.len()
    }

    /// Number of letters shared with another word
    #[inline]
    #[must_use]
    pub const fn shared_letters(&self, other: &Self) -> u32 {
        self.letters.overlap(other.letters)
    }

    /// True when the two words share no letter
    #[inline]
    #[must_use]
    pub const fn is_disjoint(&self, other: &Self) -> bool {
        self.letters.is_disjoint(other.letters)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
