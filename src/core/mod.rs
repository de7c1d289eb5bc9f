//! Core domain types
//!
//! Words and their letter-set bitmasks. Everything here is pure and has no
//! knowledge of graphs or search.

mod letters;
mod word;

pub use letters::{ALPHABET_SIZE, LetterSet};
pub use word::{CaseNormalization, Word, WordError};

/// Clique size that fills the alphabet for words of a given length
///
/// Five-letter words give 5 (25 letters), six-letter words give 4, and so on.
/// Returns `None` for lengths outside `1..=26`.
///
/// # Examples
/// ```
/// use word_cliques::core::suggested_clique_size;
///
/// assert_eq!(suggested_clique_size(5), Some(5));
/// assert_eq!(suggested_clique_size(7), Some(3));
/// assert_eq!(suggested_clique_size(0), None);
/// ```
#[must_use]
pub const fn suggested_clique_size(word_length: usize) -> Option<usize> {
    if word_length == 0 || word_length > ALPHABET_SIZE {
        None
    } else {
        Some(ALPHABET_SIZE / word_length)
    }
}
