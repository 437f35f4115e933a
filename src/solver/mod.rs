//! Word solving
//!
//! The [`WordSolver`] trait is the boundary between the grid and any
//! dictionary; [`DictionarySolver`] is the bundled implementation.

mod dictionary;
mod engine;
mod word_solver;

pub use dictionary::{Dictionary, MIN_WORD_LENGTH, normalize_entry};
pub use engine::{DictionarySolver, find_words};
pub use word_solver::WordSolver;
