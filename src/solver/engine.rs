//! Dictionary-backed grid solver
//!
//! Walks the adjacency graph depth-first from every tile, never reusing a
//! tile within a walk, and stops a branch as soon as its letters are not a
//! dictionary prefix. Start tiles are explored in parallel.

use super::dictionary::Dictionary;
use super::word_solver::WordSolver;
use crate::core::Board;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, instrument};

/// Solver that enumerates grid words against a [`Dictionary`]
#[derive(Debug, Clone, Default)]
pub struct DictionarySolver {
    dictionary: Dictionary,
    words: FxHashSet<String>,
}

impl DictionarySolver {
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            words: FxHashSet::default(),
        }
    }

    /// Solver over the embedded dictionary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(Dictionary::embedded())
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

impl WordSolver for DictionarySolver {
    #[instrument(skip_all, fields(size = board.size()))]
    fn solve(&mut self, board: &Board) {
        self.words = find_words(&self.dictionary, board);
        debug!(words = self.words.len(), "grid solved");
    }

    fn words(&self) -> &FxHashSet<String> {
        &self.words
    }

    fn is_word(&self, candidate: &str) -> bool {
        self.dictionary.contains(candidate)
    }
}

/// Every dictionary word spelled by some non-repeating path on `board`
///
/// # Examples
/// ```
/// use word_finder::core::Board;
/// use word_finder::solver::{Dictionary, find_words};
///
/// let board = Board::from_letters(&[vec!['c', 'a'], vec!['x', 't']]).unwrap();
/// let dictionary = Dictionary::new(["cat", "act", "tax", "cab"]);
/// let mut words: Vec<String> = find_words(&dictionary, &board).into_iter().collect();
/// words.sort();
/// assert_eq!(words, ["act", "cat", "tax"]);
/// ```
#[must_use]
pub fn find_words(dictionary: &Dictionary, board: &Board) -> FxHashSet<String> {
    let tile_count = board.tiles().len();

    (0..tile_count)
        .into_par_iter()
        .map(|start| {
            let mut walk = Walk {
                dictionary,
                board,
                visited: vec![false; tile_count],
                letters: String::new(),
                found: FxHashSet::default(),
            };
            walk.visit(start);
            walk.found
        })
        .reduce(FxHashSet::default, |mut acc, found| {
            acc.extend(found);
            acc
        })
}

/// Depth-first walk state for one start tile
struct Walk<'a> {
    dictionary: &'a Dictionary,
    board: &'a Board,
    visited: Vec<bool>,
    letters: String,
    found: FxHashSet<String>,
}

impl Walk<'_> {
    fn visit(&mut self, index: usize) {
        let board = self.board;
        let tile = board.tile_at(index);
        let mark = self.letters.len();
        self.letters.push_str(tile.text());

        if self.dictionary.contains(&self.letters) && !self.found.contains(&self.letters) {
            self.found.insert(self.letters.clone());
        }

        if self.dictionary.is_prefix(&self.letters) {
            self.visited[index] = true;
            for &next in tile.neighbors() {
                if !self.visited[next] {
                    self.visit(next);
                }
            }
            self.visited[index] = false;
        }

        self.letters.truncate(mark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&str]) -> Board {
        let letters: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        Board::from_letters(&letters).unwrap()
    }

    fn sorted(words: &FxHashSet<String>) -> Vec<&str> {
        let mut list: Vec<&str> = words.iter().map(String::as_str).collect();
        list.sort_unstable();
        list
    }

    #[test]
    fn finds_top_row_word() {
        let board = board(&["cat", "xxx", "xxx"]);
        let dictionary = Dictionary::new(["cat", "dog"]);
        assert_eq!(sorted(&find_words(&dictionary, &board)), ["cat"]);
    }

    #[test]
    fn never_reuses_a_tile() {
        // "tat" would need the single 't' twice
        let board = board(&["ta", "xx"]);
        let dictionary = Dictionary::new(["tat", "att"]);
        assert!(find_words(&dictionary, &board).is_empty());
    }

    #[test]
    fn diagonal_paths_count() {
        let board = board(&["cx", "xa"]);
        let dictionary = Dictionary::new(["cax"]);
        // c(0,0) -> a(1,1) -> x(0,1) or x(1,0)
        assert_eq!(sorted(&find_words(&dictionary, &board)), ["cax"]);
    }

    #[test]
    fn q_tile_spells_qu() {
        let board = board(&["qi", "tx"]);
        let dictionary = Dictionary::new(["quit", "qit"]);
        assert_eq!(sorted(&find_words(&dictionary, &board)), ["quit"]);
    }

    #[test]
    fn solver_caches_per_grid() {
        let mut solver = DictionarySolver::new(Dictionary::new(["cat", "dog"]));
        assert!(solver.words().is_empty());

        solver.solve(&board(&["cat", "xxx", "xxx"]));
        assert_eq!(sorted(solver.words()), ["cat"]);

        solver.solve(&board(&["dog", "xxx", "xxx"]));
        assert_eq!(sorted(solver.words()), ["dog"]);
    }

    #[test]
    fn is_word_uses_dictionary_not_grid() {
        let solver = DictionarySolver::new(Dictionary::new(["cat", "dog"]));
        assert!(solver.is_word("dog"));
        assert!(solver.is_word("CAT"));
        assert!(!solver.is_word("cow"));
        assert!(!solver.is_word(""));
    }

    #[test]
    fn embedded_solver_finds_words() {
        let mut solver = DictionarySolver::embedded();
        solver.solve(&board(&["cat", "ode", "gin"]));
        assert!(solver.words().contains("cat"));
        assert!(solver.words().iter().all(|w| solver.is_word(w)));
    }
}
