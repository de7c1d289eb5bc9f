//! Strict-then-fuzzy escalation
//!
//! Runs the strict search first and raises the tolerance one letter at a time
//! until some clique appears or the ceiling is reached.

use super::finder::{CliqueFinder, DEFAULT_TOLERANCE_CEILING, MAX_TOLERANCE_CEILING, SearchConfig};
use super::result::{Clique, rank_by_overlap};
use crate::error::{CliqueError, Result};
use log::info;

/// Options for [`CliqueFinder::escalate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscalationConfig {
    /// Highest tolerance to try
    pub ceiling: u32,
    pub max_results: Option<usize>,
    pub parallel: bool,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            ceiling: DEFAULT_TOLERANCE_CEILING,
            max_results: None,
            parallel: false,
        }
    }
}

/// Outcome of an escalation: the tolerance that first produced cliques
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Escalation {
    pub tolerance: u32,
    /// Ranked least-overlapping first when `tolerance > 0`
    pub cliques: Vec<Clique>,
}

impl Escalation {
    #[must_use]
    pub const fn is_fuzzy(&self) -> bool {
        self.tolerance > 0
    }
}

impl CliqueFinder<'_> {
    /// Search at tolerance 0, 1, ... up to the ceiling
    ///
    /// Returns the first non-empty result set. Fuzzy results are ranked with
    /// [`rank_by_overlap`]. With `max_results` set, the cap is applied in
    /// search order before ranking, so the result is the first `m` cliques
    /// found, sorted; it is not necessarily the `m` least-overlapping ones.
    ///
    /// # Errors
    /// - `ToleranceCeilingExceeded` if the ceiling is above [`MAX_TOLERANCE_CEILING`]
    /// - `InvalidSize` if `n` is out of range
    /// - `NoCliqueFound` if every tolerance up to the ceiling comes back empty
    ///
    /// # Examples
    /// ```
    /// use word_cliques::clique::{CliqueFinder, EscalationConfig};
    ///
    /// let finder = CliqueFinder::from_words(&["bat", "cot", "fun"]).unwrap();
    /// let found = finder.escalate(3, &EscalationConfig::default()).unwrap();
    /// assert_eq!(found.tolerance, 1);
    /// assert_eq!(found.cliques.len(), 1);
    /// ```
    pub fn escalate(&self, n: usize, config: &EscalationConfig) -> Result<Escalation> {
        if config.ceiling > MAX_TOLERANCE_CEILING {
            return Err(CliqueError::ToleranceCeilingExceeded {
                requested: config.ceiling,
                ceiling: MAX_TOLERANCE_CEILING,
            });
        }

        for tolerance in 0..=config.ceiling {
            let search = SearchConfig {
                tolerance,
                max_results: config.max_results,
                ceiling: config.ceiling,
                parallel: config.parallel,
            };

            let mut cliques = self.find_cliques(n, &search)?;
            if cliques.is_empty() {
                info!("No {n}-word cliques at tolerance {tolerance}");
                continue;
            }

            if tolerance > 0 {
                rank_by_overlap(&mut cliques);
            }
            return Ok(Escalation { tolerance, cliques });
        }

        Err(CliqueError::NoCliqueFound {
            n,
            ceiling: config.ceiling,
        })
    }
}
