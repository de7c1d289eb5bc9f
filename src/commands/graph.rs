//! Graph command
//!
//! Builds the word graph, summarizes it, and optionally writes its table.

use crate::core::CaseNormalization;
use crate::error::Result;
use crate::graph::{WordFilter, WordGraph};
use crate::output::formatters::graph_file_name;
use crate::output::table::write_rows;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Configuration for building a graph
pub struct GraphConfig {
    pub case: CaseNormalization,
    pub filter: WordFilter,
    pub output_dir: Option<PathBuf>,
    pub delimiter: u8,
}

impl GraphConfig {
    #[must_use]
    pub const fn new(case: CaseNormalization, filter: WordFilter) -> Self {
        Self {
            case,
            filter,
            output_dir: None,
            delimiter: b',',
        }
    }
}

/// Result of building a graph
pub struct GraphSummary {
    pub words: usize,
    pub edges: usize,
    /// Words with no neighbor at all
    pub isolated: usize,
    /// Word with the most neighbors, and how many
    pub best_connected: Option<(String, usize)>,
    pub duration: Duration,
    pub written: Option<PathBuf>,
}

/// Build a graph from raw words and summarize it
///
/// # Errors
///
/// Returns an error if:
/// - A word contains characters other than ASCII letters
/// - No word survives the filter
/// - The table cannot be written
pub fn build_graph(words: &[String], config: &GraphConfig) -> Result<(WordGraph, GraphSummary)> {
    let start = Instant::now();
    let graph = WordGraph::with_options(words, config.case, &config.filter)?;
    let duration = start.elapsed();

    let written = match &config.output_dir {
        Some(dir) => {
            let path = dir.join(graph_file_name(config.filter.length));
            write_rows(&path, &graph.export_table(), config.delimiter)?;
            Some(path)
        }
        None => None,
    };

    let summary = summarize(&graph, duration, written);
    Ok((graph, summary))
}

fn summarize(graph: &WordGraph, duration: Duration, written: Option<PathBuf>) -> GraphSummary {
    let degrees = (0..graph.len()).map(|i| graph.neighbor_indices(i).len());

    let isolated = degrees.clone().filter(|&d| d == 0).count();

    // First word wins ties
    let best_connected = degrees
        .enumerate()
        .fold(None, |best: Option<(usize, usize)>, (i, d)| match best {
            Some((_, best_d)) if best_d >= d => best,
            _ => Some((i, d)),
        })
        .filter(|&(_, d)| d > 0)
        .map(|(i, d)| (graph.word(i).text().to_string(), d));

    GraphSummary {
        words: graph.len(),
        edges: graph.edge_count(),
        isolated,
        best_connected,
        duration,
        written,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn summary_counts() {
        let words = owned(&["cat", "dog", "fig", "bun", "tab"]);
        let config = GraphConfig::new(CaseNormalization::Lower, WordFilter::none());
        let (graph, summary) = build_graph(&words, &config).unwrap();

        assert_eq!(graph.len(), 5);
        assert_eq!(summary.words, 5);
        // cat-dog cat-fig cat-bun dog-bun fig-bun dog-tab fig-tab
        assert_eq!(summary.edges, 7);
        assert_eq!(summary.isolated, 0);
        assert_eq!(summary.best_connected, Some(("cat".to_string(), 3)));
        assert!(summary.written.is_none());
    }

    #[test]
    fn isolated_words_counted() {
        let words = owned(&["cat", "act", "tac"]);
        let config = GraphConfig::new(CaseNormalization::Lower, WordFilter::none());
        let (_, summary) = build_graph(&words, &config).unwrap();
        assert_eq!(summary.isolated, 3);
        assert_eq!(summary.best_connected, None);
    }

    #[test]
    fn writes_named_table() {
        let dir = tempfile::tempdir().unwrap();
        let words = owned(&["fjord", "waltz", "speed"]);
        let mut config = GraphConfig::new(CaseNormalization::Lower, WordFilter::for_length(5));
        config.output_dir = Some(dir.path().to_path_buf());

        let (_, summary) = build_graph(&words, &config).unwrap();
        let path = summary.written.unwrap();
        assert!(path.ends_with("word_graph-5.csv"));
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "fjord,waltz\nwaltz,fjord\n"
        );
    }
}
