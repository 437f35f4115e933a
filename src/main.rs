//! Word Finder - CLI
//!
//! Word-search game on a square letter grid, with TUI and text modes plus
//! commands to generate, solve and sample grids.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_finder::{
    commands::{DictionarySource, GameConfig, generate_grid, run_simple, run_stats, solve_letters},
    core::LetterGrid,
    output::{print_generate_result, print_solve_result, print_stats_result},
};

#[derive(Parser)]
#[command(
    name = "word_finder",
    about = "Find words by tracing paths through a grid of letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Grid side length
    #[arg(short, long, global = true, default_value_t = GameConfig::DEFAULT_SIZE)]
    size: usize,

    /// Dictionary: 'embedded' (default) or path to a word list file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Seed for reproducible grids
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type tile paths like 'a1 b2 c3')
    Simple,

    /// Generate a random grid
    Generate {
        /// List every word on the grid
        #[arg(long)]
        solve: bool,
    },

    /// List every word on a grid given as text
    Solve {
        /// Grid letters, rows separated by '/' (e.g. 'cat/xxx/xxx' or 'catxxxxxx')
        letters: String,
    },

    /// Sample random grids and report letter and point statistics
    Stats {
        /// Number of grids to sample
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

/// Install the tracing subscriber
///
/// Logs go to `log_file` when given, since the TUI owns the terminal;
/// otherwise warnings and above go to stderr.
fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref())?;

    let config = GameConfig {
        size: cli.size,
        seed: cli.seed,
        dictionary: DictionarySource::from_arg(&cli.dictionary),
    };
    info!(?config, "starting");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Generate { solve } => run_generate_command(&config, solve),
        Commands::Solve { letters } => run_solve_command(&config, &letters),
        Commands::Stats { count } => run_stats_command(&config, count),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use word_finder::interactive::{App, run_tui};

    let grid = LetterGrid::new(config.solver()?);
    let app = App::new(grid, config.generator(), config.size)?;
    run_tui(app)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut grid = LetterGrid::new(config.solver()?);
    let mut generator = config.generator();
    run_simple(&mut grid, &mut generator, config.size)
}

fn run_generate_command(config: &GameConfig, show_words: bool) -> Result<()> {
    let mut generator = config.generator();
    let result = generate_grid(config.size, &mut generator, config.solver()?)?;
    print_generate_result(&result, show_words);
    Ok(())
}

fn run_solve_command(config: &GameConfig, letters: &str) -> Result<()> {
    let result = solve_letters(letters, config.solver()?)?;
    print_solve_result(&result);
    Ok(())
}

fn run_stats_command(config: &GameConfig, count: usize) -> Result<()> {
    let dictionary = config.dictionary.load()?;
    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());

    println!(
        "Sampling {count} random {size}x{size} grids (seed {base_seed})...",
        size = config.size
    );

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    pb.set_message("solving grids");

    let result = run_stats(config.size, count, base_seed, &dictionary, &pb)?;
    pb.finish_and_clear();

    print_stats_result(&result);
    Ok(())
}
