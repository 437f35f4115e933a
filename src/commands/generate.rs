//! Grid generation command
//!
//! Generates a random grid and, optionally, every word it contains.

use super::solve::ranked_words;
use crate::core::{Board, GridError, LetterGenerator, LetterGrid, LetterMix};
use crate::solver::WordSolver;
use rand::Rng;

/// Result of generating a grid
pub struct GenerateResult {
    pub board: Board,
    pub mix: LetterMix,
    /// Every word on the grid, longest first
    pub words: Vec<String>,
    pub possible_points: i64,
}

/// Generate and solve a random `size` x `size` grid
///
/// # Errors
///
/// Returns [`GridError::InvalidDimensions`] if `size` is zero.
pub fn generate_grid<R: Rng, S: WordSolver>(
    size: usize,
    generator: &mut LetterGenerator<R>,
    solver: S,
) -> Result<GenerateResult, GridError> {
    let (letters, mix) = generator.generate_with_mix(size);

    let mut grid = LetterGrid::new(solver);
    grid.load(&letters)?;

    Ok(GenerateResult {
        board: grid.board().clone(),
        mix,
        words: ranked_words(grid.possible_words()),
        possible_points: grid.possible_points(),
    })
}
