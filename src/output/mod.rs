//! Output
//!
//! Delimited table export and terminal pretty-printing.

pub mod display;
pub mod formatters;
pub mod table;

pub use display::{print_clique_result, print_graph_summary, print_neighbors, print_sweep_result};
pub use table::{Row, export_cliques, write_rows, write_rows_to};
