//! Length sweep command
//!
//! Runs the clique search once per word length, with the clique size that
//! fills the alphabet for that length.

use super::cliques::{CliqueConfig, run_cliques};
use crate::clique::DEFAULT_TOLERANCE_CEILING;
use crate::core::{CaseNormalization, suggested_clique_size};
use crate::graph::WordFilter;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Configuration for a sweep over word lengths
pub struct SweepConfig {
    pub from: usize,
    pub to: usize,
    pub case: CaseNormalization,
    pub escalate: bool,
    pub ceiling: u32,
    pub max_results: Option<usize>,
    pub parallel: bool,
    pub output_dir: Option<PathBuf>,
    pub delimiter: u8,
    pub show_progress: bool,
}

impl SweepConfig {
    #[must_use]
    pub const fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            case: CaseNormalization::Lower,
            escalate: false,
            ceiling: DEFAULT_TOLERANCE_CEILING,
            max_results: None,
            parallel: false,
            output_dir: None,
            delimiter: b',',
            show_progress: false,
        }
    }
}

/// Outcome for one word length
#[derive(Debug, Clone)]
pub struct SweepEntry {
    pub length: usize,
    pub n: usize,
    pub vertices: usize,
    pub tolerance: u32,
    pub cliques: usize,
    pub written: Option<PathBuf>,
    /// Why this length produced nothing, if it failed
    pub error: Option<String>,
}

/// Statistics from a sweep
#[derive(Debug)]
pub struct SweepResult {
    pub entries: Vec<SweepEntry>,
    pub total_time: Duration,
}

impl SweepResult {
    /// Total cliques over all lengths
    #[must_use]
    pub fn total_cliques(&self) -> usize {
        self.entries.iter().map(|e| e.cliques).sum()
    }
}

/// Search every word length in `from..=to`
///
/// A failure for one length (no words of that length, nothing found after
/// escalation) is recorded in its entry and does not stop the sweep.
pub fn run_sweep(words: &[String], config: &SweepConfig) -> SweepResult {
    let lengths: Vec<usize> = (config.from..=config.to)
        .filter(|&len| suggested_clique_size(len).is_some())
        .collect();

    let pb = if config.show_progress {
        ProgressBar::new(lengths.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut entries = Vec::with_capacity(lengths.len());

    for length in lengths {
        pb.set_message(format!("length {length}"));

        let mut clique_config = CliqueConfig::new(None, WordFilter::for_length(length));
        clique_config.case = config.case;
        clique_config.escalate = config.escalate;
        clique_config.ceiling = config.ceiling;
        clique_config.max_results = config.max_results;
        clique_config.parallel = config.parallel;
        clique_config.output_dir.clone_from(&config.output_dir);
        clique_config.delimiter = config.delimiter;

        let n = suggested_clique_size(length).unwrap_or(1);
        let entry = match run_cliques(words, &clique_config) {
            Ok(result) => SweepEntry {
                length,
                n: result.n,
                vertices: result.vertices,
                tolerance: result.tolerance,
                cliques: result.cliques.len(),
                written: result.written,
                error: None,
            },
            Err(e) => {
                warn!("Length {length}: {e}");
                SweepEntry {
                    length,
                    n,
                    vertices: 0,
                    tolerance: 0,
                    cliques: 0,
                    written: None,
                    error: Some(e.to_string()),
                }
            }
        };

        entries.push(entry);
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    SweepResult {
        entries,
        total_time: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn sweeps_each_length() {
        let words = owned(&[
            "fjord", "gucks", "nymph", "vibex", "waltz", // 5
            "abcdefghijklm", "nopqrstuvwxyz", // 13
        ]);
        let result = run_sweep(&words, &SweepConfig::new(5, 13));

        assert_eq!(result.entries.len(), 9);
        let five = &result.entries[0];
        assert_eq!(five.length, 5);
        assert_eq!(five.n, 5);
        assert_eq!(five.cliques, 1);
        assert!(five.error.is_none());

        let thirteen = result.entries.last().unwrap();
        assert_eq!(thirteen.length, 13);
        assert_eq!(thirteen.n, 2);
        assert_eq!(thirteen.cliques, 1);

        // no six-letter words at all
        assert!(result.entries[1].error.is_some());
        assert_eq!(result.total_cliques(), 2);
    }

    #[test]
    fn skips_impossible_lengths() {
        let words = owned(&["fjord"]);
        let result = run_sweep(&words, &SweepConfig::new(0, 0));
        assert!(result.entries.is_empty());
    }
}
