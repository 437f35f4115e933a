//! Word Finder
//!
//! A word-search game on a square grid of letters: trace a path through
//! touching tiles to spell a word, then submit it for judging and scoring.
//!
//! # Quick Start
//!
//! ```rust
//! use word_finder::core::{LetterGrid, Position, Verdict};
//! use word_finder::solver::{Dictionary, DictionarySolver};
//!
//! let solver = DictionarySolver::new(Dictionary::new(["cat", "tax"]));
//! let mut grid = LetterGrid::new(solver);
//! grid.load(&[
//!     vec!['c', 'a', 't'],
//!     vec!['x', 'x', 'x'],
//!     vec!['x', 'x', 'x'],
//! ])?;
//!
//! for col in 0..3 {
//!     grid.select(Position::new(0, col))?;
//! }
//! let submission = grid.submit();
//! assert_eq!(submission.word, "cat");
//! assert_eq!(submission.verdict, Verdict::New);
//! assert_eq!(grid.points(), 1);
//! # Ok::<(), word_finder::core::GridError>(())
//! ```

// Core game types
pub mod core;

// Word solving
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
