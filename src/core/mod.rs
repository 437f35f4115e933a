//! Core game types
//!
//! Tiles, the tile arena, letter generation and the grid state machine.
//! Everything here is synchronous and single-threaded; the only outside
//! collaborator is the [`WordSolver`](crate::solver::WordSolver) a grid is
//! built with.

mod board;
mod error;
mod grid;
mod letters;
mod notify;
mod tile;
mod word;

pub use board::{Board, display_letter, parse_letters};
pub use error::GridError;
pub use grid::{LetterGrid, Selection, Submission, Verdict};
pub use letters::{
    HARD_LETTERS, LetterGenerator, LetterMix, REGULAR_LETTERS, VOWELS, is_pool_letter,
};
pub use notify::ChangeNotifier;
pub use tile::{Position, Tile, TileState};
pub use word::{normalize_word, tile_text, total_points, word_points};
