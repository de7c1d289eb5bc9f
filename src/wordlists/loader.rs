//! Word list loading utilities
//!
//! Reads line-delimited word lists. The graph does its own validation, so the
//! loader only trims lines and skips blanks and comments.

use crate::core::{CaseNormalization, Word};
use std::fs;
use std::io;
use std::path::Path;

/// Load raw words from a file, one per line
///
/// Leading and trailing whitespace is trimmed. Empty lines and lines starting
/// with `#` are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_cliques::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words/output.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content))
}

/// Split text into words the same way [`load_from_file`] does
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Convert string slices to Words, skipping invalid entries
///
/// # Examples
/// ```
/// use word_cliques::core::CaseNormalization;
/// use word_cliques::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["fjord", "it's", "waltz"], CaseNormalization::Lower);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice<S: AsRef<str>>(slice: &[S], case: CaseNormalization) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|s| Word::new(s.as_ref(), case).ok())
        .collect()
}
