//! Display functions for command results

use super::formatters::density_bar;
use crate::commands::{CliqueRunResult, GraphSummary, NeighborReport, SweepResult};
use colored::Colorize;

/// Print a summary of a built graph
pub fn print_graph_summary(summary: &GraphSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD GRAPH".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let bar = density_bar(summary.edges, summary.words, 30);

    println!("\n📊 {}", "Structure:".bright_cyan().bold());
    println!("   Words:        {}", summary.words);
    println!(
        "   Edges:        {}",
        format!("{}", summary.edges).bright_yellow()
    );
    println!("   Density:      [{}]", bar.green());
    println!("   Isolated:     {}", summary.isolated);
    if let Some((word, degree)) = &summary.best_connected {
        println!(
            "   Most links:   {} ({degree} neighbors)",
            word.bright_yellow().bold()
        );
    }
    println!("   Time taken:   {:.3}s", summary.duration.as_secs_f64());

    if let Some(path) = &summary.written {
        println!("\n💾 Written to {}", path.display().to_string().green());
    }
}

/// Print the neighbors of a word
pub fn print_neighbors(report: &NeighborReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Neighbors of {}: {} of {} words",
        report.word.bright_yellow().bold(),
        report.neighbors.len(),
        report.total_words
    );
    println!("{}", "─".repeat(60).cyan());

    for chunk in report.neighbors.chunks(8) {
        println!("  {}", chunk.join(" "));
    }

    if let Some(pair) = &report.pair {
        println!();
        if pair.adjacent {
            println!(
                "{}",
                format!("✅ {} and {} share no letters", report.word, pair.other).green()
            );
        } else {
            println!(
                "{}",
                format!(
                    "❌ {} and {} share {} letter{}: {}",
                    report.word,
                    pair.other,
                    pair.shared,
                    if pair.shared == 1 { "" } else { "s" },
                    pair.shared_letters
                )
                .red()
            );
        }
    }
}

/// Print the result of a clique search, showing at most `limit` cliques
pub fn print_clique_result(result: &CliqueRunResult, limit: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "CLIQUES OF".bright_cyan().bold(),
        format!("{} WORDS", result.n).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Searched {} words", result.vertices);
    if result.is_fuzzy() {
        println!(
            "   Tolerance:    {}",
            format!("{} shared letters per pair", result.tolerance).yellow()
        );
    }
    println!("   Time taken:   {:.3}s", result.duration.as_secs_f64());

    if result.cliques.is_empty() {
        println!("\n{}", "❌ No cliques found".red().bold());
        return;
    }

    println!(
        "\n{}",
        format!("✅ Found {} cliques", result.cliques.len())
            .green()
            .bold()
    );

    for clique in result.cliques.iter().take(limit) {
        println!("   {clique}");
    }
    if result.cliques.len() > limit {
        println!(
            "   {}",
            format!("... and {} more", result.cliques.len() - limit).bright_black()
        );
    }

    if let Some(path) = &result.written {
        println!("\n💾 Written to {}", path.display().to_string().green());
    }
}

/// Print one line per length of a sweep
pub fn print_sweep_result(result: &SweepResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LENGTH SWEEP".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for entry in &result.entries {
        let status = match &entry.error {
            Some(err) => err.red().to_string(),
            None if entry.tolerance > 0 => format!(
                "{} cliques (tolerance {})",
                entry.cliques, entry.tolerance
            )
            .yellow()
            .to_string(),
            None => format!("{} cliques", entry.cliques).green().to_string(),
        };
        println!(
            "   length {:2} → n = {:2}, {:6} words: {status}",
            entry.length, entry.n, entry.vertices
        );
    }

    println!(
        "\n   Total: {} cliques in {:.2}s",
        format!("{}", result.total_cliques()).bright_yellow().bold(),
        result.total_time.as_secs_f64()
    );
}
