//! Word lists
//!
//! Loading word lists from line-delimited files.

pub mod loader;

pub use loader::{load_from_file, words_from_slice};
