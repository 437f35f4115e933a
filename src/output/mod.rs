//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_found_words, print_generate_result, print_grid, print_possible_words,
    print_solve_result, print_stats_result, print_submission,
};
