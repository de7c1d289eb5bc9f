//! Backtracking n-clique search
//!
//! The search grows a candidate set one vertex at a time. The pool holds the
//! vertices after the last member that are compatible with every member, in
//! ascending index order, so each clique is produced exactly once and the
//! output is the lexicographic order of member-index tuples.

use super::result::Clique;
use crate::error::{CliqueError, Result};
use crate::graph::WordGraph;
use log::{debug, info, warn};
use rayon::prelude::*;
use std::borrow::Cow;
use std::time::Instant;

/// Default highest fuzzy tolerance a search may use
pub const DEFAULT_TOLERANCE_CEILING: u32 = 3;

/// Hard upper bound for any configured ceiling
pub const MAX_TOLERANCE_CEILING: u32 = 8;

/// Roots handed to the pool per worker thread in one parallel batch
const ROOTS_PER_THREAD: usize = 4;

/// Above this size each word can only be a couple of letters long
const LARGE_CLIQUE_WARNING: usize = 8;

/// Options for a single search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum letters any pair may share (0 = strict)
    pub tolerance: u32,
    /// Stop after this many cliques
    pub max_results: Option<usize>,
    /// Highest tolerance accepted
    pub ceiling: u32,
    /// Search top-level branches on the rayon pool
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::strict()
    }
}

impl SearchConfig {
    /// Exact cliques only
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            tolerance: 0,
            max_results: None,
            ceiling: DEFAULT_TOLERANCE_CEILING,
            parallel: false,
        }
    }

    /// Pairs may share up to `tolerance` letters
    #[must_use]
    pub const fn fuzzy(tolerance: u32) -> Self {
        Self {
            tolerance,
            ..Self::strict()
        }
    }

    #[must_use]
    pub const fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    #[must_use]
    pub const fn with_ceiling(mut self, ceiling: u32) -> Self {
        self.ceiling = ceiling;
        self
    }

    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    fn limit(&self) -> usize {
        self.max_results.unwrap_or(usize::MAX)
    }
}

/// Receives cliques as the search finds them
trait CliqueSink {
    fn record(&mut self, members: &[usize]);
    fn is_full(&self) -> bool;
}

struct Collect {
    found: Vec<Vec<usize>>,
    limit: usize,
}

impl CliqueSink for Collect {
    fn record(&mut self, members: &[usize]) {
        self.found.push(members.to_vec());
    }

    fn is_full(&self) -> bool {
        self.found.len() >= self.limit
    }
}

struct Count {
    count: usize,
    limit: usize,
}

impl CliqueSink for Count {
    fn record(&mut self, _members: &[usize]) {
        self.count += 1;
    }

    fn is_full(&self) -> bool {
        self.count >= self.limit
    }
}

/// Enumerates cliques over a read-only graph
///
/// Borrows an existing graph, or owns one built by [`CliqueFinder::from_words`].
pub struct CliqueFinder<'g> {
    graph: Cow<'g, WordGraph>,
}

impl<'g> CliqueFinder<'g> {
    /// Search over a pre-built graph
    #[must_use]
    pub const fn new(graph: &'g WordGraph) -> Self {
        Self {
            graph: Cow::Borrowed(graph),
        }
    }

    /// Build and own a graph from raw words
    ///
    /// # Errors
    /// Propagates graph construction errors.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<CliqueFinder<'static>> {
        Ok(CliqueFinder {
            graph: Cow::Owned(WordGraph::new(words)?),
        })
    }

    #[must_use]
    pub fn graph(&self) -> &WordGraph {
        &self.graph
    }

    /// Find cliques of exactly `n` words
    ///
    /// Returns an empty vector when no clique exists at the configured
    /// tolerance; it is up to the caller to retry with a higher one (see
    /// [`CliqueFinder::escalate`]). Results come in search order, not ranked.
    ///
    /// With `parallel` set, roots are searched in ordered batches on the rayon
    /// pool. Once `max_results` cliques are collected no further batch starts,
    /// and the output is identical to the sequential search.
    ///
    /// # Errors
    /// - `InvalidSize` if `n` is 0 or exceeds the vertex count
    /// - `ToleranceCeilingExceeded` if the tolerance is above the ceiling, or
    ///   the ceiling is above [`MAX_TOLERANCE_CEILING`]
    ///
    /// # Examples
    /// ```
    /// use word_cliques::clique::{CliqueFinder, SearchConfig};
    ///
    /// let finder = CliqueFinder::from_words(&["fjord", "waltz", "crane", "nymph"]).unwrap();
    /// let cliques = finder.find_cliques(2, &SearchConfig::strict()).unwrap();
    /// assert_eq!(cliques[0].words(), ["fjord", "waltz"]);
    /// ```
    pub fn find_cliques(&self, n: usize, config: &SearchConfig) -> Result<Vec<Clique>> {
        self.validate(n, config)?;
        let start = Instant::now();

        info!(
            "Searching for {n}-word cliques among {} words (tolerance {})",
            self.graph.len(),
            config.tolerance
        );

        let limit = config.limit();
        let found: Vec<Vec<usize>> = if config.parallel {
            self.search_parallel(n, config.tolerance, limit)
        } else {
            let mut sink = Collect {
                found: Vec::new(),
                limit,
            };
            self.search(n, config.tolerance, &mut sink);
            sink.found
        };

        let cliques: Vec<Clique> = found
            .into_iter()
            .map(|indices| Clique::from_indices(&self.graph, indices, config.tolerance))
            .collect();

        info!(
            "Found {} cliques in {:.3}s",
            cliques.len(),
            start.elapsed().as_secs_f64()
        );

        Ok(cliques)
    }

    /// Count cliques of exactly `n` words without materializing them
    ///
    /// # Errors
    /// Same as [`CliqueFinder::find_cliques`].
    pub fn count_cliques(&self, n: usize, config: &SearchConfig) -> Result<usize> {
        self.validate(n, config)?;

        let limit = config.limit();
        if config.parallel {
            let mut total = 0usize;
            for batch in self.root_batches() {
                if total >= limit {
                    break;
                }
                let remaining = limit - total;
                let counted: usize = batch
                    .into_par_iter()
                    .map(|root| {
                        let mut sink = Count {
                            count: 0,
                            limit: remaining,
                        };
                        self.search_root(root, n, config.tolerance, &mut sink);
                        sink.count
                    })
                    .sum();
                total += counted;
            }
            Ok(total.min(limit))
        } else {
            let mut sink = Count { count: 0, limit };
            self.search(n, config.tolerance, &mut sink);
            Ok(sink.count)
        }
    }

    /// Root vertices in consecutive batches of a few per worker thread
    fn root_batches(&self) -> impl Iterator<Item = std::ops::Range<usize>> {
        let len = self.graph.len();
        let size = rayon::current_num_threads().max(1) * ROOTS_PER_THREAD;
        (0..len).step_by(size).map(move |start| start..(start + size).min(len))
    }

    /// Runs each batch of roots on the rayon pool and appends the branches in
    /// root order, stopping at the first batch that fills `limit`
    fn search_parallel(&self, n: usize, tolerance: u32, limit: usize) -> Vec<Vec<usize>> {
        let mut found: Vec<Vec<usize>> = Vec::new();
        for batch in self.root_batches() {
            if found.len() >= limit {
                break;
            }
            let remaining = limit - found.len();
            let branches: Vec<Vec<Vec<usize>>> = batch
                .into_par_iter()
                .map(|root| {
                    let mut sink = Collect {
                        found: Vec::new(),
                        limit: remaining,
                    };
                    self.search_root(root, n, tolerance, &mut sink);
                    sink.found
                })
                .collect();
            found.extend(branches.into_iter().flatten().take(remaining));
        }
        found
    }

    fn validate(&self, n: usize, config: &SearchConfig) -> Result<()> {
        if n == 0 || n > self.graph.len() {
            return Err(CliqueError::InvalidSize {
                n,
                vertices: self.graph.len(),
            });
        }

        if config.ceiling > MAX_TOLERANCE_CEILING {
            return Err(CliqueError::ToleranceCeilingExceeded {
                requested: config.ceiling,
                ceiling: MAX_TOLERANCE_CEILING,
            });
        }

        if config.tolerance > config.ceiling {
            return Err(CliqueError::ToleranceCeilingExceeded {
                requested: config.tolerance,
                ceiling: config.ceiling,
            });
        }

        if n > LARGE_CLIQUE_WARNING {
            warn!("Searching for {n}-word cliques; this can take a very long time on large lists");
        }

        Ok(())
    }

    fn search<S: CliqueSink>(&self, n: usize, tolerance: u32, sink: &mut S) {
        for root in 0..self.graph.len() {
            if sink.is_full() || self.graph.len() - root < n {
                break;
            }
            self.search_root(root, n, tolerance, sink);
        }
    }

    /// All cliques whose smallest member is `root`
    fn search_root<S: CliqueSink>(&self, root: usize, n: usize, tolerance: u32, sink: &mut S) {
        let mut candidate = Vec::with_capacity(n);
        candidate.push(root);

        if n == 1 {
            sink.record(&candidate);
            return;
        }

        let pool: Vec<usize> = (root + 1..self.graph.len())
            .filter(|&v| self.graph.compatible(root, v, tolerance))
            .collect();

        if 1 + pool.len() < n {
            return;
        }

        debug!(
            "Root '{}' has {} compatible words",
            self.graph.word(root),
            pool.len()
        );

        self.extend(n, tolerance, &mut candidate, &pool, sink);
    }

    fn extend<S: CliqueSink>(
        &self,
        n: usize,
        tolerance: u32,
        candidate: &mut Vec<usize>,
        pool: &[usize],
        sink: &mut S,
    ) {
        for (pos, &next) in pool.iter().enumerate() {
            if sink.is_full() {
                return;
            }

            let rest = &pool[pos + 1..];
            // Even taking every remaining word cannot reach n
            if candidate.len() + 1 + rest.len() < n {
                return;
            }

            candidate.push(next);
            if candidate.len() == n {
                sink.record(candidate);
            } else {
                let narrowed: Vec<usize> = rest
                    .iter()
                    .copied()
                    .filter(|&v| self.graph.compatible(next, v, tolerance))
                    .collect();
                if candidate.len() + narrowed.len() >= n {
                    self.extend(n, tolerance, candidate, &narrowed, sink);
                }
            }
            candidate.pop();
        }
    }
}
