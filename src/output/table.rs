//! Tabular export
//!
//! Graphs and clique sets are turned into plain rows of strings and written
//! as delimited text without a header. Rows may differ in width.
//!
//! - Graph rows: `word, neighbor_1, ..., neighbor_k`
//! - Clique rows: `member_1, ..., member_n` plus a trailing overlap score when
//!   the clique was found with tolerance above zero

use crate::clique::Clique;
use crate::error::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One row of exported text
pub type Row = Vec<String>;

/// One row per clique
#[must_use]
pub fn export_cliques(cliques: &[Clique]) -> Vec<Row> {
    cliques.iter().map(clique_row).collect()
}

fn clique_row(clique: &Clique) -> Row {
    let mut row: Row = clique.words().to_vec();
    if clique.is_fuzzy() {
        row.push(clique.overlap().to_string());
    }
    row
}

/// Write rows to any writer
///
/// # Errors
/// Returns an error if a row cannot be written or flushed.
pub fn write_rows_to<W: Write>(writer: W, rows: &[Row], delimiter: u8) -> Result<()> {
    let mut csv = WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_writer(writer);

    for row in rows {
        csv.write_record(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// Write rows to a file, replacing it
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_rows<P: AsRef<Path>>(path: P, rows: &[Row], delimiter: u8) -> Result<()> {
    let file = File::create(path.as_ref())?;
    log::info!("Writing {} rows to {}", rows.len(), path.as_ref().display());
    write_rows_to(file, rows, delimiter)
}
