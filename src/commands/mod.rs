//! Command implementations

pub mod config;
pub mod generate;
pub mod simple;
pub mod solve;
pub mod stats;

pub use config::{DictionarySource, GameConfig};
pub use generate::{GenerateResult, generate_grid};
pub use simple::{PathOutcome, parse_path, play_path, run_simple};
pub use solve::{SolveResult, ranked_words, solve_letters};
pub use stats::{POINTS_BUCKET, StatsResult, run_stats};
