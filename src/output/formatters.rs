//! Formatting utilities for terminal output and file names

/// File name for an exported graph: `word_graph-{len}.csv`
#[must_use]
pub fn graph_file_name(length: Option<usize>) -> String {
    format!("word_graph-{}.csv", length_label(length))
}

/// File name for exported cliques
///
/// `cliques-{len}.csv`, or `cliques-fuzzy-{len}.csv` for fuzzy results.
#[must_use]
pub fn clique_file_name(length: Option<usize>, fuzzy: bool) -> String {
    let label = length_label(length);
    if fuzzy {
        format!("cliques-fuzzy-{label}.csv")
    } else {
        format!("cliques-{label}.csv")
    }
}

fn length_label(length: Option<usize>) -> String {
    length.map_or_else(|| "all".to_string(), |len| len.to_string())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Edge density of a graph as a bar
#[must_use]
pub fn density_bar(edges: usize, vertices: usize, width: usize) -> String {
    let possible = vertices.saturating_mul(vertices.saturating_sub(1)) / 2;
    create_progress_bar(edges as f64, possible as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_names() {
        assert_eq!(graph_file_name(Some(5)), "word_graph-5.csv");
        assert_eq!(graph_file_name(None), "word_graph-all.csv");
    }

    #[test]
    fn clique_names() {
        assert_eq!(clique_file_name(Some(7), false), "cliques-7.csv");
        assert_eq!(clique_file_name(Some(7), true), "cliques-fuzzy-7.csv");
        assert_eq!(clique_file_name(None, false), "cliques-all.csv");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn density_of_complete_graph() {
        assert_eq!(density_bar(6, 4, 4), "████");
        assert_eq!(density_bar(0, 1, 4), "░░░░");
    }
}
