//! Error types for graph construction and clique search.
//!
//! None of these are transient. They are surfaced to the caller unchanged,
//! and the caller decides whether to retry with different parameters (for
//! example a higher fuzzy tolerance).

use std::io;

use thiserror::Error;

use crate::core::WordError;

/// The main error type for word-clique operations.
#[derive(Error, Debug)]
pub enum CliqueError {
    /// Requested clique size is zero or larger than the vertex count
    #[error("invalid clique size {n}: must be between 1 and {vertices}")]
    InvalidSize { n: usize, vertices: usize },

    /// Neither a clique size nor a word length to derive one from
    #[error("no clique size given: pass a size or a word length between 1 and 26")]
    MissingSize,

    /// A query named a word that is not a vertex of the graph
    #[error("unknown word '{0}'")]
    UnknownWord(String),

    /// Escalation ran up to the ceiling without finding any clique
    #[error("no clique of size {n} found at any tolerance up to {ceiling}")]
    NoCliqueFound { n: usize, ceiling: u32 },

    /// Fuzzy tolerance above the configured ceiling
    #[error("tolerance {requested} exceeds the ceiling of {ceiling}")]
    ToleranceCeilingExceeded { requested: u32, ceiling: u32 },

    /// No vertices left after filtering
    #[error("word list is empty")]
    EmptyWordList,

    /// An input word could not be turned into a vertex
    #[error("invalid word '{word}': {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },

    /// I/O errors while writing tables
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Delimited writer errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for word-clique operations.
pub type Result<T> = std::result::Result<T, CliqueError>;

impl CliqueError {
    /// Create an unknown-word error.
    pub fn unknown_word<S: Into<String>>(word: S) -> Self {
        CliqueError::UnknownWord(word.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = CliqueError::InvalidSize { n: 0, vertices: 4 };
        assert_eq!(
            err.to_string(),
            "invalid clique size 0: must be between 1 and 4"
        );

        let err = CliqueError::unknown_word("zebra");
        assert_eq!(err.to_string(), "unknown word 'zebra'");

        let err = CliqueError::ToleranceCeilingExceeded {
            requested: 5,
            ceiling: 3,
        };
        assert_eq!(err.to_string(), "tolerance 5 exceeds the ceiling of 3");
    }

    #[test]
    fn invalid_word_keeps_source() {
        use std::error::Error as _;

        let err = CliqueError::InvalidWord {
            word: "it's".to_string(),
            source: WordError::InvalidCharacter('\''),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("it's"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: CliqueError = io_err.into();
        assert!(matches!(err, CliqueError::Io(_)));
    }
}
