//! Neighbor lookup command
//!
//! Lists the words sharing no letter with a given word, and optionally checks
//! a single pair.

use crate::core::LetterSet;
use crate::error::Result;
use crate::graph::WordGraph;

/// Comparison of two specific words
pub struct PairReport {
    pub other: String,
    pub adjacent: bool,
    pub shared: u32,
    /// The shared letters, in alphabet order
    pub shared_letters: String,
}

/// Result of looking up a word
pub struct NeighborReport {
    pub word: String,
    pub neighbors: Vec<String>,
    pub total_words: usize,
    pub pair: Option<PairReport>,
}

/// Look up `word` in the graph, and compare it with `other` if given
///
/// # Errors
///
/// Returns `UnknownWord` if either word is not in the graph.
pub fn inspect_word(graph: &WordGraph, word: &str, other: Option<&str>) -> Result<NeighborReport> {
    let neighbors = graph
        .neighbors(word)?
        .into_iter()
        .map(|w| w.text().to_string())
        .collect();

    let pair = other.map(|other| compare(graph, word, other)).transpose()?;

    Ok(NeighborReport {
        word: graph.case().apply(word),
        neighbors,
        total_words: graph.len(),
        pair,
    })
}

fn compare(graph: &WordGraph, word: &str, other: &str) -> Result<PairReport> {
    let adjacent = graph.is_adjacent(word, other)?;
    let shared = graph.shared_letters(word, other)?;

    let letters = |w: &str| {
        graph
            .index_of(w)
            .map_or(LetterSet::EMPTY, |i| graph.word(i).letters())
    };
    let shared_letters = letters(word).intersection(letters(other)).to_string();

    Ok(PairReport {
        other: graph.case().apply(other),
        adjacent,
        shared,
        shared_letters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliqueError;

    fn graph() -> WordGraph {
        WordGraph::new(&["crane", "slate", "fjord", "waltz"]).unwrap()
    }

    #[test]
    fn lists_neighbors() {
        let report = inspect_word(&graph(), "FJORD", None).unwrap();
        assert_eq!(report.word, "fjord");
        assert_eq!(report.neighbors, vec!["slate", "waltz"]);
        assert_eq!(report.total_words, 4);
        assert!(report.pair.is_none());
    }

    #[test]
    fn compares_pair() {
        let report = inspect_word(&graph(), "crane", Some("slate")).unwrap();
        let pair = report.pair.unwrap();
        assert_eq!(pair.other, "slate");
        assert!(!pair.adjacent);
        assert_eq!(pair.shared, 2);
        assert_eq!(pair.shared_letters, "ae");
    }

    #[test]
    fn unknown_words() {
        assert!(matches!(
            inspect_word(&graph(), "zebra", None),
            Err(CliqueError::UnknownWord(_))
        ));
        assert!(matches!(
            inspect_word(&graph(), "crane", Some("zebra")),
            Err(CliqueError::UnknownWord(_))
        ));
    }
}
