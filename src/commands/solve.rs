//! Grid solving command
//!
//! Lists every word on a grid given as text.

use crate::core::{Board, GridError, LetterGrid, parse_letters};
use crate::solver::WordSolver;
use rustc_hash::FxHashSet;

/// Result of solving a grid
pub struct SolveResult {
    pub board: Board,
    /// Every word on the grid, longest first
    pub words: Vec<String>,
    pub possible_points: i64,
}

/// Solve a grid written as text (see [`parse_letters`])
///
/// # Errors
///
/// Returns an error if the text does not describe a square grid of letters.
pub fn solve_letters<S: WordSolver>(text: &str, solver: S) -> Result<SolveResult, GridError> {
    let mut grid = LetterGrid::new(solver);
    grid.load(&parse_letters(text))?;

    Ok(SolveResult {
        board: grid.board().clone(),
        words: ranked_words(grid.possible_words()),
        possible_points: grid.possible_points(),
    })
}

/// Sort words longest first, then alphabetically
#[must_use]
pub fn ranked_words(words: &FxHashSet<String>) -> Vec<String> {
    let mut ranked: Vec<String> = words.iter().cloned().collect();
    ranked.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Dictionary, DictionarySolver};

    fn solver(words: &[&str]) -> DictionarySolver {
        DictionarySolver::new(Dictionary::new(words))
    }

    #[test]
    fn solves_cat_grid() {
        let result = solve_letters("cat/xxx/xxx", solver(&["cat", "act", "tax"])).unwrap();
        assert_eq!(result.board.size(), 3);
        // "act" would need c and t to touch
        assert_eq!(result.words, ["cat", "tax"]);
        assert_eq!(result.possible_points, 2);
    }

    #[test]
    fn rejects_non_square_text() {
        assert!(matches!(
            solve_letters("cat/xx", solver(&["cat"])),
            Err(GridError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            solve_letters("", solver(&["cat"])),
            Err(GridError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn rejects_digits() {
        assert_eq!(
            solve_letters("c4/ab", solver(&["cat"])).err(),
            Some(GridError::InvalidLetter { letter: '4' })
        );
    }

    #[test]
    fn ranking_order() {
        let words: FxHashSet<String> = ["tea", "teas", "ate", "seat"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(ranked_words(&words), ["seat", "teas", "ate", "tea"]);
    }
}
