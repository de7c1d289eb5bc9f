//! Clique values and overlap ranking

use crate::graph::WordGraph;
use std::fmt;

/// A set of words that pairwise share at most `tolerance` letters
///
/// Members are stored in ascending vertex order. For a strict clique
/// (`tolerance == 0`) both overlap scores are zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clique {
    indices: Vec<usize>,
    words: Vec<String>,
    tolerance: u32,
    overlap: u32,
    max_overlap: u32,
}

impl Clique {
    /// Build a clique from vertex indices, scoring every pair
    pub(crate) fn from_indices(graph: &WordGraph, indices: Vec<usize>, tolerance: u32) -> Self {
        let mut overlap = 0;
        let mut max_overlap = 0;
        for (pos, &i) in indices.iter().enumerate() {
            for &j in &indices[pos + 1..] {
                let shared = graph.overlap(i, j);
                overlap += shared;
                max_overlap = max_overlap.max(shared);
            }
        }

        let words = indices
            .iter()
            .map(|&i| graph.word(i).text().to_string())
            .collect();

        Self {
            indices,
            words,
            tolerance,
            overlap,
            max_overlap,
        }
    }

    /// Member words in search order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Member vertex indices, ascending
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Tolerance the clique was found under
    #[inline]
    #[must_use]
    pub const fn tolerance(&self) -> u32 {
        self.tolerance
    }

    /// Sum of shared-letter counts over all member pairs
    #[inline]
    #[must_use]
    pub const fn overlap(&self) -> u32 {
        self.overlap
    }

    /// Largest shared-letter count of any single pair
    #[inline]
    #[must_use]
    pub const fn max_overlap(&self) -> u32 {
        self.max_overlap
    }

    #[inline]
    #[must_use]
    pub const fn is_fuzzy(&self) -> bool {
        self.tolerance > 0
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl fmt::Display for Clique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))?;
        if self.is_fuzzy() {
            write!(f, " (overlap {})", self.overlap)?;
        }
        Ok(())
    }
}

/// Order cliques least-overlapping first
///
/// Sorts by total overlap, then by worst pair. The sort is stable, so equal
/// scores keep their search order.
pub fn rank_by_overlap(cliques: &mut [Clique]) {
    cliques.sort_by_key(|c| (c.overlap, c.max_overlap));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> WordGraph {
        WordGraph::new(&["crane", "slate", "fjord", "waltz", "plumb"]).unwrap()
    }

    #[test]
    fn strict_clique_scores_zero() {
        let g = graph();
        let clique = Clique::from_indices(&g, vec![2, 3], 0);
        assert_eq!(clique.words(), ["fjord", "waltz"]);
        assert_eq!(clique.overlap(), 0);
        assert_eq!(clique.max_overlap(), 0);
        assert!(!clique.is_fuzzy());
        assert_eq!(clique.to_string(), "fjord waltz");
    }

    #[test]
    fn fuzzy_clique_scores_pairs() {
        let g = graph();
        // crane-slate: a,e  crane-fjord: r  slate-fjord: none
        let clique = Clique::from_indices(&g, vec![0, 1, 2], 2);
        assert_eq!(clique.overlap(), 3);
        assert_eq!(clique.max_overlap(), 2);
        assert!(clique.is_fuzzy());
        assert_eq!(clique.to_string(), "crane slate fjord (overlap 3)");
    }

    #[test]
    fn contains_member() {
        let g = graph();
        let clique = Clique::from_indices(&g, vec![2, 3], 0);
        assert!(clique.contains("waltz"));
        assert!(!clique.contains("crane"));
        assert_eq!(clique.len(), 2);
    }

    #[test]
    fn ranking_is_stable() {
        let g = graph();
        let mut cliques = vec![
            Clique::from_indices(&g, vec![0, 1], 2), // 2
            Clique::from_indices(&g, vec![0, 2], 2), // 1
            Clique::from_indices(&g, vec![2, 3], 2), // 0
            Clique::from_indices(&g, vec![0, 4], 2), // 0
        ];
        rank_by_overlap(&mut cliques);
        let order: Vec<Vec<usize>> = cliques.iter().map(|c| c.indices().to_vec()).collect();
        assert_eq!(order, vec![vec![2, 3], vec![0, 4], vec![0, 2], vec![0, 1]]);
    }
}
