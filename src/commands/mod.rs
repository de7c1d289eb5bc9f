//! Command implementations

pub mod cliques;
pub mod graph;
pub mod neighbors;
pub mod sweep;

pub use cliques::{CliqueConfig, CliqueRunResult, run_cliques, search_graph};
pub use graph::{GraphConfig, GraphSummary, build_graph};
pub use neighbors::{NeighborReport, PairReport, inspect_word};
pub use sweep::{SweepConfig, SweepEntry, SweepResult, run_sweep};
