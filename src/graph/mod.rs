//! Word compatibility graph
//!
//! Vertices are words; two words are adjacent when they share no letter.
//! The graph is built once and is read-only afterwards.

mod filter;

pub use filter::WordFilter;

use crate::core::{CaseNormalization, Word};
use crate::error::{CliqueError, Result};
use log::{debug, info};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::Instant;

/// The "shares no letters" graph over a word list
///
/// Vertices keep input order after duplicates are removed, and every neighbor
/// list is sorted by vertex index. Adjacency is symmetric and irreflexive.
#[derive(Debug, Clone)]
pub struct WordGraph {
    words: Vec<Word>,
    neighbors: Vec<Vec<usize>>,
    index: FxHashMap<String, usize>,
    case: CaseNormalization,
}

impl WordGraph {
    /// Build a graph from raw words, lowercased, with no filter
    ///
    /// # Errors
    /// - `InvalidWord` if an entry contains anything other than ASCII letters
    /// - `EmptyWordList` if no words remain
    ///
    /// # Examples
    /// ```
    /// use word_cliques::graph::WordGraph;
    ///
    /// let graph = WordGraph::new(&["fjord", "waltz", "crane"]).unwrap();
    /// assert!(graph.is_adjacent("fjord", "waltz").unwrap());
    /// assert!(!graph.is_adjacent("fjord", "crane").unwrap());
    /// ```
    pub fn new<S: AsRef<str>>(words: &[S]) -> Result<Self> {
        Self::with_options(words, CaseNormalization::Lower, &WordFilter::none())
    }

    /// Build a graph with explicit case handling and word filter
    ///
    /// Words are deduplicated by their normalized text; the first occurrence
    /// keeps its position.
    ///
    /// # Errors
    /// - `InvalidWord` if an entry contains anything other than ASCII letters
    /// - `EmptyWordList` if no words remain after filtering
    pub fn with_options<S: AsRef<str>>(
        words: &[S],
        case: CaseNormalization,
        filter: &WordFilter,
    ) -> Result<Self> {
        let mut accepted = Vec::with_capacity(words.len());
        let mut filtered = 0usize;

        for raw in words {
            let raw: &str = raw.as_ref();
            let word = Word::new(raw, case).map_err(|source| CliqueError::InvalidWord {
                word: raw.to_string(),
                source,
            })?;
            if filter.accepts(&word) {
                accepted.push(word);
            } else {
                filtered += 1;
            }
        }

        if filtered > 0 {
            debug!("Filtered out {filtered} of {} words", words.len());
        }

        Self::from_words(accepted, case)
    }

    /// Build a graph from already-constructed words
    ///
    /// `case` must be the normalization the words were built with; it is used
    /// to normalize lookups.
    ///
    /// # Errors
    /// Returns `EmptyWordList` if `words` is empty.
    pub fn from_words(words: Vec<Word>, case: CaseNormalization) -> Result<Self> {
        let start = Instant::now();

        let mut index: FxHashMap<String, usize> = FxHashMap::default();
        let mut unique = Vec::with_capacity(words.len());
        for word in words {
            if index.contains_key(word.text()) {
                debug!("Dropping duplicate word '{word}'");
                continue;
            }
            index.insert(word.text().to_string(), unique.len());
            unique.push(word);
        }

        if unique.is_empty() {
            return Err(CliqueError::EmptyWordList);
        }

        let neighbors = compute_neighbors(&unique);

        let graph = Self {
            words: unique,
            neighbors,
            index,
            case,
        };

        info!(
            "Graph with {} words and {} edges built in {:.3}s",
            graph.len(),
            graph.edge_count(),
            start.elapsed().as_secs_f64()
        );

        Ok(graph)
    }

    /// Number of vertices
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All vertices in order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Vertex at `index`
    ///
    /// # Panics
    /// Panics if `index >= self.len()`
    #[inline]
    #[must_use]
    pub fn word(&self, index: usize) -> &Word {
        &self.words[index]
    }

    #[inline]
    #[must_use]
    pub const fn case(&self) -> CaseNormalization {
        self.case
    }

    /// Number of undirected edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Vertex index of `word`, after case normalization
    #[must_use]
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(&self.case.apply(word)).copied()
    }

    fn require(&self, word: &str) -> Result<usize> {
        self.index_of(word)
            .ok_or_else(|| CliqueError::unknown_word(word))
    }

    /// Neighbor indices of the vertex at `index`, ascending
    ///
    /// # Panics
    /// Panics if `index >= self.len()`
    #[inline]
    #[must_use]
    pub fn neighbor_indices(&self, index: usize) -> &[usize] {
        &self.neighbors[index]
    }

    /// Words sharing no letter with `word`, in vertex order
    ///
    /// # Errors
    /// Returns `UnknownWord` if `word` is not a vertex.
    pub fn neighbors(&self, word: &str) -> Result<Vec<&Word>> {
        let i = self.require(word)?;
        Ok(self.neighbors[i].iter().map(|&j| &self.words[j]).collect())
    }

    /// True when the two words share no letter
    ///
    /// # Errors
    /// Returns `UnknownWord` if either word is not a vertex.
    pub fn is_adjacent(&self, a: &str, b: &str) -> Result<bool> {
        let i = self.require(a)?;
        let j = self.require(b)?;
        Ok(self.neighbors[i].binary_search(&j).is_ok())
    }

    /// Number of letters the two words share
    ///
    /// # Errors
    /// Returns `UnknownWord` if either word is not a vertex.
    pub fn shared_letters(&self, a: &str, b: &str) -> Result<u32> {
        let i = self.require(a)?;
        let j = self.require(b)?;
        Ok(self.overlap(i, j))
    }

    /// Shared-letter count between two vertices
    #[inline]
    #[must_use]
    pub fn overlap(&self, i: usize, j: usize) -> u32 {
        self.words[i].shared_letters(&self.words[j])
    }

    /// Whether two distinct vertices share at most `tolerance` letters
    ///
    /// At tolerance 0 this is exactly graph adjacency.
    #[inline]
    #[must_use]
    pub fn compatible(&self, i: usize, j: usize, tolerance: u32) -> bool {
        i != j && self.overlap(i, j) <= tolerance
    }

    /// One row per vertex: the word followed by its neighbors in vertex order
    #[must_use]
    pub fn export_table(&self) -> Vec<Vec<String>> {
        self.words
            .iter()
            .zip(&self.neighbors)
            .map(|(word, neighbors)| {
                std::iter::once(word.text().to_string())
                    .chain(neighbors.iter().map(|&j| self.words[j].text().to_string()))
                    .collect()
            })
            .collect()
    }
}

/// Disjointness is one AND per pair, so the O(V²) pass is split across
/// vertices with rayon; each vertex scans the full list.
fn compute_neighbors(words: &[Word]) -> Vec<Vec<usize>> {
    words
        .par_iter()
        .enumerate()
        .map(|(i, word)| {
            let letters = word.letters();
            words
                .iter()
                .enumerate()
                .filter(|&(j, other)| j != i && letters.is_disjoint(other.letters()))
                .map(|(j, _)| j)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WordGraph {
        WordGraph::new(&["cat", "dog", "fig", "bun"]).unwrap()
    }

    #[test]
    fn cat_dog_fig_bun_adjacency() {
        let graph = sample();
        let table = graph.export_table();

        // Only dog-fig share a letter ('g')
        assert_eq!(
            table,
            vec![
                vec!["cat", "dog", "fig", "bun"],
                vec!["dog", "cat", "bun"],
                vec!["fig", "cat", "bun"],
                vec!["bun", "cat", "dog", "fig"],
            ]
        );
        assert_eq!(graph.edge_count(), 5);
    }

    #[test]
    fn neighbors_in_vertex_order() {
        let graph = sample();
        let texts: Vec<&str> = graph
            .neighbors("bun")
            .unwrap()
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(texts, vec!["cat", "dog", "fig"]);
    }

    #[test]
    fn unknown_word_errors() {
        let graph = sample();
        assert!(matches!(
            graph.neighbors("emu"),
            Err(CliqueError::UnknownWord(w)) if w == "emu"
        ));
        assert!(matches!(
            graph.is_adjacent("cat", "emu"),
            Err(CliqueError::UnknownWord(_))
        ));
        assert!(matches!(
            graph.is_adjacent("emu", "cat"),
            Err(CliqueError::UnknownWord(_))
        ));
    }

    #[test]
    fn lookups_are_case_normalized() {
        let graph = sample();
        assert_eq!(graph.index_of("CAT"), Some(0));
        assert!(graph.is_adjacent("Cat", "DOG").unwrap());
    }

    #[test]
    fn duplicates_removed_first_kept() {
        let graph = WordGraph::new(&["fig", "cat", "FIG", "fig", "dog"]).unwrap();
        assert_eq!(graph.len(), 3);
        let texts: Vec<&str> = graph.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["fig", "cat", "dog"]);
    }

    #[test]
    fn anagrams_are_both_kept() {
        let graph = WordGraph::new(&["listen", "silent", "bum"]).unwrap();
        assert_eq!(graph.len(), 3);
        assert!(!graph.is_adjacent("listen", "silent").unwrap());
        assert!(graph.is_adjacent("listen", "bum").unwrap());
    }

    #[test]
    fn no_self_loops() {
        let graph = sample();
        for i in 0..graph.len() {
            assert!(!graph.neighbor_indices(i).contains(&i));
            assert!(!graph.compatible(i, i, 26));
        }
    }

    #[test]
    fn shared_letter_counts() {
        let graph = WordGraph::new(&["crane", "slate", "fjord"]).unwrap();
        assert_eq!(graph.shared_letters("crane", "slate").unwrap(), 2);
        assert_eq!(graph.shared_letters("crane", "fjord").unwrap(), 1);
        assert!(graph.compatible(0, 2, 1));
        assert!(!graph.compatible(0, 1, 1));
    }

    #[test]
    fn empty_input_errors() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            WordGraph::new(&empty),
            Err(CliqueError::EmptyWordList)
        ));
    }

    #[test]
    fn everything_filtered_errors() {
        let result = WordGraph::with_options(
            &["cat", "dog"],
            CaseNormalization::Lower,
            &WordFilter::for_length(5),
        );
        assert!(matches!(result, Err(CliqueError::EmptyWordList)));
    }

    #[test]
    fn invalid_word_errors() {
        let result = WordGraph::new(&["cat", "it's"]);
        assert!(matches!(
            result,
            Err(CliqueError::InvalidWord { word, .. }) if word == "it's"
        ));
    }

    #[test]
    fn filter_applied() {
        let graph = WordGraph::with_options(
            &["crane", "speed", "fjord", "cat"],
            CaseNormalization::Lower,
            &WordFilter::for_length(5),
        )
        .unwrap();
        let texts: Vec<&str> = graph.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "fjord"]);
    }

    #[test]
    fn case_none_keeps_cases_apart() {
        let graph = WordGraph::with_options(
            &["ABC", "abc"],
            CaseNormalization::None,
            &WordFilter::none(),
        )
        .unwrap();
        assert_eq!(graph.len(), 2);
        assert!(graph.is_adjacent("ABC", "abc").unwrap());
        assert_eq!(graph.index_of("Abc"), None);
    }
}
