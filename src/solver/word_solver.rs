//! Word solver boundary
//!
//! The grid delegates dictionary knowledge to a solver passed in at
//! construction, so tests and alternative dictionaries plug in freely.

use crate::core::Board;
use rustc_hash::FxHashSet;

/// Full-grid word enumeration and single-word validation
pub trait WordSolver {
    /// Enumerate and cache every legal word reachable on `board`
    ///
    /// Called after every grid load; replaces any previous result.
    fn solve(&mut self, board: &Board);

    /// Words cached by the last [`solve`](WordSolver::solve)
    ///
    /// Empty if `solve` has not run for the current grid.
    fn words(&self) -> &FxHashSet<String>;

    /// Check if `candidate` is a playable dictionary word
    ///
    /// Case-insensitive. The `qu` digraph is already expanded by the caller.
    fn is_word(&self, candidate: &str) -> bool;
}

impl<T: WordSolver + ?Sized> WordSolver for Box<T> {
    fn solve(&mut self, board: &Board) {
        (**self).solve(board);
    }

    fn words(&self) -> &FxHashSet<String> {
        (**self).words()
    }

    fn is_word(&self, candidate: &str) -> bool {
        (**self).is_word(candidate)
    }
}
