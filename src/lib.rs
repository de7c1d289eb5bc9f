//! Word Cliques
//!
//! Finds sets of words in which no two words share a letter, such as
//! `fjord gucks nymph vibex waltz`. Words are vertices of a graph whose edges
//! join letter-disjoint pairs, and the sets are the graph's cliques. When no
//! exact clique exists, a fuzzy search allows a few shared letters per pair.
//!
//! # Quick Start
//!
//! ```rust
//! use word_cliques::clique::{CliqueFinder, SearchConfig};
//! use word_cliques::graph::WordGraph;
//!
//! let graph = WordGraph::new(&["fjord", "gucks", "nymph", "vibex", "waltz", "crane"]).unwrap();
//! let finder = CliqueFinder::new(&graph);
//!
//! let cliques = finder.find_cliques(5, &SearchConfig::strict()).unwrap();
//! assert_eq!(cliques.len(), 1);
//! println!("{}", cliques[0]);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Compatibility graph
pub mod graph;

// Clique search
pub mod clique;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Table export and terminal output
pub mod output;

// Logger setup
pub mod logging;
