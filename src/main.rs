//! Word Cliques - CLI
//!
//! Builds letter-disjoint word graphs and searches them for cliques.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use word_cliques::{
    clique::DEFAULT_TOLERANCE_CEILING,
    commands::{
        CliqueConfig, GraphConfig, SweepConfig, build_graph, inspect_word, run_cliques, run_sweep,
    },
    core::CaseNormalization,
    graph::WordFilter,
    logging::init_logger,
    output::{print_clique_result, print_graph_summary, print_neighbors, print_sweep_result},
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "word_cliques",
    about = "Find sets of words that share no letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "words/output.txt")]
    wordlist: PathBuf,

    /// Case normalization: lower (default), upper, none
    #[arg(long, global = true, default_value = "lower")]
    case: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Args, Clone)]
struct WordSelection {
    /// Only use words of this length (and without repeated letters)
    #[arg(short = 'l', long)]
    length: Option<usize>,

    /// Drop words with repeated letters even without --length
    #[arg(long)]
    distinct: bool,
}

impl WordSelection {
    fn filter(&self) -> WordFilter {
        match self.length {
            Some(len) => WordFilter::for_length(len),
            None => WordFilter {
                length: None,
                distinct_letters: self.distinct,
            },
        }
    }
}

#[derive(Args, Clone)]
struct OutputOptions {
    /// Directory to write CSV files into
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Field delimiter: a single character, or "tab"
    #[arg(long, default_value = ",")]
    delimiter: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the word graph and summarize it
    Graph {
        #[command(flatten)]
        selection: WordSelection,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Show the neighbors of a word
    Neighbors {
        /// Word to look up
        word: String,

        /// Compare against this word
        #[arg(long = "with")]
        other: Option<String>,

        #[command(flatten)]
        selection: WordSelection,
    },

    /// Find cliques of N mutually letter-disjoint words
    Cliques {
        /// Clique size (default: 26 / length)
        #[arg(short)]
        n: Option<usize>,

        #[command(flatten)]
        selection: WordSelection,

        /// Shared letters allowed per pair
        #[arg(short, long, default_value = "0")]
        tolerance: u32,

        /// Raise the tolerance until cliques are found
        #[arg(short, long)]
        escalate: bool,

        /// Highest tolerance allowed
        #[arg(long, default_value_t = DEFAULT_TOLERANCE_CEILING)]
        ceiling: u32,

        /// Stop after this many cliques
        #[arg(short, long)]
        max_results: Option<usize>,

        /// Search top-level branches in parallel
        #[arg(short, long)]
        parallel: bool,

        /// How many cliques to print
        #[arg(long, default_value = "20")]
        show: usize,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Search each word length in a range
    Sweep {
        /// First word length
        #[arg(long, default_value = "7")]
        from: usize,

        /// Last word length
        #[arg(long, default_value = "12")]
        to: usize,

        /// Raise the tolerance until cliques are found
        #[arg(short, long)]
        escalate: bool,

        /// Highest tolerance allowed
        #[arg(long, default_value_t = DEFAULT_TOLERANCE_CEILING)]
        ceiling: u32,

        /// Stop after this many cliques per length
        #[arg(short, long)]
        max_results: Option<usize>,

        /// Search top-level branches in parallel
        #[arg(short, long)]
        parallel: bool,

        #[command(flatten)]
        output: OutputOptions,
    },
}

fn parse_delimiter(raw: &str) -> Result<u8> {
    if raw.eq_ignore_ascii_case("tab") || raw == "\\t" {
        return Ok(b'\t');
    }
    match raw.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => bail!("Delimiter must be a single ASCII character, got {raw:?}"),
    }
}

fn prepare_output(output: &OutputOptions) -> Result<(Option<PathBuf>, u8)> {
    let delimiter = parse_delimiter(&output.delimiter)?;
    if let Some(dir) = &output.output {
        log::debug!("Ensuring output directory {} exists", dir.display());
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    Ok((output.output.clone(), delimiter))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose.saturating_add(1));

    let case = CaseNormalization::from_name(&cli.case);
    let words = load_from_file(&cli.wordlist)
        .with_context(|| format!("Failed to read word list {}", cli.wordlist.display()))?;

    match cli.command {
        Commands::Graph { selection, output } => {
            let (output_dir, delimiter) = prepare_output(&output)?;
            let mut config = GraphConfig::new(case, selection.filter());
            config.output_dir = output_dir;
            config.delimiter = delimiter;

            let (_, summary) = build_graph(&words, &config)?;
            print_graph_summary(&summary);
        }
        Commands::Neighbors {
            word,
            other,
            selection,
        } => {
            let config = GraphConfig::new(case, selection.filter());
            let (graph, _) = build_graph(&words, &config)?;
            let report = inspect_word(&graph, &word, other.as_deref())?;
            print_neighbors(&report);
        }
        Commands::Cliques {
            n,
            selection,
            tolerance,
            escalate,
            ceiling,
            max_results,
            parallel,
            show,
            output,
        } => {
            let (output_dir, delimiter) = prepare_output(&output)?;
            let mut config = CliqueConfig::new(n, selection.filter());
            config.case = case;
            config.tolerance = tolerance;
            config.escalate = escalate;
            config.ceiling = ceiling;
            config.max_results = max_results;
            config.parallel = parallel;
            config.output_dir = output_dir;
            config.delimiter = delimiter;

            if config.n.is_none() && config.filter.length.is_none() {
                bail!("Pass -n or --length to choose a clique size");
            }

            let result = run_cliques(&words, &config)?;
            print_clique_result(&result, show);
        }
        Commands::Sweep {
            from,
            to,
            escalate,
            ceiling,
            max_results,
            parallel,
            output,
        } => {
            let (output_dir, delimiter) = prepare_output(&output)?;
            let mut config = SweepConfig::new(from, to);
            config.case = case;
            config.escalate = escalate;
            config.ceiling = ceiling;
            config.max_results = max_results;
            config.parallel = parallel;
            config.output_dir = output_dir;
            config.delimiter = delimiter;
            config.show_progress = true;

            println!(
                "Sweeping word lengths {from}..={to} over {} words",
                words.len()
            );
            let result = run_sweep(&words, &config);
            print_sweep_result(&result);
        }
    }

    Ok(())
}
