//! Clique search command
//!
//! Builds a graph for one word selection, searches it, and writes the result.

use crate::clique::{
    Clique, CliqueFinder, DEFAULT_TOLERANCE_CEILING, EscalationConfig, SearchConfig,
    rank_by_overlap,
};
use crate::core::{CaseNormalization, suggested_clique_size};
use crate::error::{CliqueError, Result};
use crate::graph::{WordFilter, WordGraph};
use crate::output::formatters::clique_file_name;
use crate::output::table::{export_cliques, write_rows};
use log::debug;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Configuration for a clique search run
pub struct CliqueConfig {
    /// Clique size; derived from the word length filter when unset
    pub n: Option<usize>,
    pub case: CaseNormalization,
    pub filter: WordFilter,
    pub tolerance: u32,
    /// Retry with increasing tolerance when nothing is found
    pub escalate: bool,
    pub ceiling: u32,
    pub max_results: Option<usize>,
    pub parallel: bool,
    pub output_dir: Option<PathBuf>,
    pub delimiter: u8,
}

impl CliqueConfig {
    #[must_use]
    pub const fn new(n: Option<usize>, filter: WordFilter) -> Self {
        Self {
            n,
            case: CaseNormalization::Lower,
            filter,
            tolerance: 0,
            escalate: false,
            ceiling: DEFAULT_TOLERANCE_CEILING,
            max_results: None,
            parallel: false,
            output_dir: None,
            delimiter: b',',
        }
    }

    /// The clique size to search for
    ///
    /// # Errors
    /// Returns `MissingSize` when neither a size nor a usable word length is set.
    pub fn resolve_size(&self) -> Result<usize> {
        self.n
            .or_else(|| self.filter.length.and_then(suggested_clique_size))
            .ok_or(CliqueError::MissingSize)
    }
}

/// Result of a clique search run
pub struct CliqueRunResult {
    pub n: usize,
    pub length: Option<usize>,
    pub vertices: usize,
    /// Tolerance the reported cliques were found at
    pub tolerance: u32,
    pub cliques: Vec<Clique>,
    pub duration: Duration,
    pub written: Option<PathBuf>,
}

impl CliqueRunResult {
    #[must_use]
    pub const fn is_fuzzy(&self) -> bool {
        self.tolerance > 0
    }
}

/// Build a graph from raw words and search it
///
/// Without escalation an empty result is returned as-is. With escalation,
/// running out of tolerance is an error.
///
/// # Errors
///
/// Returns an error if:
/// - The graph cannot be built (invalid word, nothing left after filtering)
/// - The clique size is out of range
/// - The tolerance is above the ceiling
/// - Escalation reaches the ceiling without a result
/// - The result file cannot be written
pub fn run_cliques(words: &[String], config: &CliqueConfig) -> Result<CliqueRunResult> {
    let n = config.resolve_size()?;
    let graph = WordGraph::with_options(words, config.case, &config.filter)?;
    search_graph(&graph, n, config)
}

/// Search a pre-built graph
///
/// # Errors
///
/// See [`run_cliques`].
pub fn search_graph(graph: &WordGraph, n: usize, config: &CliqueConfig) -> Result<CliqueRunResult> {
    let start = Instant::now();
    let finder = CliqueFinder::new(graph);

    let (tolerance, cliques) = if config.escalate {
        let escalation = finder.escalate(
            n,
            &EscalationConfig {
                ceiling: config.ceiling,
                max_results: config.max_results,
                parallel: config.parallel,
            },
        )?;
        (escalation.tolerance, escalation.cliques)
    } else {
        let search = SearchConfig {
            tolerance: config.tolerance,
            max_results: config.max_results,
            ceiling: config.ceiling,
            parallel: config.parallel,
        };
        let mut cliques = finder.find_cliques(n, &search)?;
        if config.tolerance > 0 {
            rank_by_overlap(&mut cliques);
        }
        (config.tolerance, cliques)
    };

    let duration = start.elapsed();
    let length = config.filter.length;

    let written = match &config.output_dir {
        Some(_) if cliques.is_empty() => {
            debug!("Skipping write, no cliques");
            None
        }
        Some(dir) => {
            let path = dir.join(clique_file_name(length, tolerance > 0));
            write_rows(&path, &export_cliques(&cliques), config.delimiter)?;
            Some(path)
        }
        None => None,
    };

    Ok(CliqueRunResult {
        n,
        length,
        vertices: graph.len(),
        tolerance,
        cliques,
        duration,
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    const CLASSIC: &[&str] = &[
        "fjord", "gucks", "nymph", "vibex", "waltz", "crane", "speed", "cat",
    ];

    #[test]
    fn size_from_length() {
        let config = CliqueConfig::new(None, WordFilter::for_length(5));
        assert_eq!(config.resolve_size().unwrap(), 5);

        let config = CliqueConfig::new(Some(2), WordFilter::for_length(5));
        assert_eq!(config.resolve_size().unwrap(), 2);

        let config = CliqueConfig::new(None, WordFilter::none());
        assert!(matches!(
            config.resolve_size(),
            Err(CliqueError::MissingSize)
        ));

        let config = CliqueConfig::new(None, WordFilter::for_length(27));
        assert!(matches!(
            config.resolve_size(),
            Err(CliqueError::MissingSize)
        ));
    }

    #[test]
    fn finds_classic_clique() {
        let config = CliqueConfig::new(None, WordFilter::for_length(5));
        let result = run_cliques(&owned(CLASSIC), &config).unwrap();

        // speed and cat are filtered out
        assert_eq!(result.vertices, 6);
        assert_eq!(result.n, 5);
        assert_eq!(result.tolerance, 0);
        assert_eq!(result.cliques.len(), 1);
        assert_eq!(
            result.cliques[0].words(),
            ["fjord", "gucks", "nymph", "vibex", "waltz"]
        );
    }

    #[test]
    fn strict_empty_is_not_an_error() {
        let config = CliqueConfig::new(Some(2), WordFilter::none());
        let result = run_cliques(&owned(&["cat", "cot", "cut"]), &config).unwrap();
        assert!(result.cliques.is_empty());
        assert!(!result.is_fuzzy());
    }

    #[test]
    fn escalation_reports_tolerance() {
        let mut config = CliqueConfig::new(Some(3), WordFilter::none());
        config.escalate = true;
        let result = run_cliques(&owned(&["bat", "cot", "fun"]), &config).unwrap();
        assert_eq!(result.tolerance, 1);
        assert!(result.is_fuzzy());
        assert_eq!(result.cliques.len(), 1);
    }

    #[test]
    fn escalation_exhausted_is_an_error() {
        let mut config = CliqueConfig::new(Some(2), WordFilter::none());
        config.escalate = true;
        config.ceiling = 1;
        let result = run_cliques(&owned(&["cat", "cot", "cut"]), &config);
        assert!(matches!(
            result,
            Err(CliqueError::NoCliqueFound { n: 2, ceiling: 1 })
        ));
    }

    #[test]
    fn writes_fuzzy_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CliqueConfig::new(Some(3), WordFilter::for_length(3));
        config.tolerance = 1;
        config.output_dir = Some(dir.path().to_path_buf());

        let result = run_cliques(&owned(&["bat", "cot", "fun"]), &config).unwrap();
        let path = result.written.unwrap();
        assert!(path.ends_with("cliques-fuzzy-3.csv"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "bat,cot,fun,1\n");
    }

    #[test]
    fn empty_result_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CliqueConfig::new(Some(2), WordFilter::none());
        config.output_dir = Some(dir.path().to_path_buf());

        let result = run_cliques(&owned(&["cat", "cot"]), &config).unwrap();
        assert!(result.written.is_none());
        assert!(!dir.path().join("cliques-all.csv").exists());
    }
}
