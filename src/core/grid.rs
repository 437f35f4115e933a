//! Letter grid game state
//!
//! Owns the tile arena, the selection path, the found-word ledger and the
//! solver. Every mutating operation ends with a change notification.
//!
//! Path selection rules, applied per selected tile:
//! 1. If the previous gesture ended in a submission, the old path is cleared
//!    first.
//! 2. Extend: an empty path, or a tile adjacent to the last path tile and not
//!    already in the path, is appended.
//! 3. Backtrack: the tile second-to-last in the path removes the last tile.
//! 4. Anything else is ignored.

use super::board::Board;
use super::error::GridError;
use super::letters::LetterGenerator;
use super::notify::ChangeNotifier;
use super::tile::{Position, Tile, TileState};
use super::word::{normalize_word, total_points};
use crate::solver::WordSolver;
use rand::Rng;
use rustc_hash::FxHashSet;
use tracing::{debug, instrument, warn};

/// Effect of a single tile selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Tile appended to the path
    Extended,
    /// Last tile removed from the path
    Backtracked,
    /// Selection had no effect
    Ignored,
}

/// Classification of a submitted word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Valid and not found before; added to the ledger
    New,
    /// Valid but already in the ledger
    Duplicate,
    /// Not a dictionary word
    Invalid,
}

impl Verdict {
    /// Tile state applied to the path for this verdict
    #[must_use]
    pub const fn tile_state(self) -> TileState {
        match self {
            Self::New => TileState::Good,
            Self::Duplicate => TileState::Dupe,
            Self::Invalid => TileState::Bad,
        }
    }
}

/// Result of submitting the current path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Normalized word read from the path
    pub word: String,
    pub verdict: Verdict,
}

/// Square grid of tiles representing the game board
pub struct LetterGrid<S: WordSolver> {
    board: Board,
    path: Vec<usize>,
    found_words: FxHashSet<String>,
    word_submitted: bool,
    solver: S,
    notifier: ChangeNotifier,
}

impl<S: WordSolver> LetterGrid<S> {
    /// Create an empty grid; call [`load`](Self::load) before playing
    pub fn new(solver: S) -> Self {
        Self {
            board: Board::default(),
            path: Vec::new(),
            found_words: FxHashSet::default(),
            word_submitted: false,
            solver,
            notifier: ChangeNotifier::new(),
        }
    }

    /// Replace the grid with `letters`
    ///
    /// Builds tiles and adjacency, clears the path and the found-word ledger,
    /// re-solves the grid and notifies observers. On error the previous grid
    /// is left untouched.
    ///
    /// # Errors
    /// - [`GridError::InvalidDimensions`] if `letters` is empty or not square
    /// - [`GridError::InvalidLetter`] if a letter is not ASCII alphabetic
    #[instrument(skip_all, fields(rows = letters.len()))]
    pub fn load(&mut self, letters: &[Vec<char>]) -> Result<(), GridError> {
        let board = Board::from_letters(letters).inspect_err(|err| {
            warn!(%err, "grid load rejected");
        })?;

        self.deselect_path();
        self.board = board;
        self.word_submitted = false;
        self.found_words.clear();
        self.solver.solve(&self.board);
        debug!(
            size = self.board.size(),
            possible_words = self.solver.words().len(),
            "grid loaded"
        );
        self.update_all();
        Ok(())
    }

    /// Generate a random `size` x `size` grid and load it
    ///
    /// # Errors
    /// Returns [`GridError::InvalidDimensions`] if `size` is zero.
    pub fn load_random<R: Rng>(
        &mut self,
        size: usize,
        generator: &mut LetterGenerator<R>,
    ) -> Result<(), GridError> {
        let letters = generator.generate(size);
        self.load(&letters)
    }

    /// Apply a selection gesture to the tile at `pos`
    ///
    /// # Errors
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid; the
    /// grid is not modified in that case.
    pub fn select(&mut self, pos: Position) -> Result<Selection, GridError> {
        let index = self.board.index_of(pos)?;

        if self.word_submitted {
            self.deselect_path();
            self.word_submitted = false;
        }

        let extends = match self.path.last() {
            None => true,
            Some(&last) => {
                self.board.tile_at(last).is_neighbor(index) && !self.path.contains(&index)
            }
        };

        if extends {
            self.path.push(index);
            self.board.tile_at_mut(index).set_state(TileState::Down);
            self.notifier.notify();
            return Ok(Selection::Extended);
        }

        if self.path.len() >= 2 && self.path[self.path.len() - 2] == index {
            if let Some(last) = self.path.pop() {
                self.board.tile_at_mut(last).set_state(TileState::Up);
            }
            self.notifier.notify();
            debug!(path = %self.path_letters(), "backtracked");
            return Ok(Selection::Backtracked);
        }

        Ok(Selection::Ignored)
    }

    /// Judge the word spelled by the current path
    ///
    /// Marks the path tiles `Good`, `Dupe` or `Bad` and records new words.
    /// The path stays selected until the next [`select`](Self::select).
    #[instrument(skip(self))]
    pub fn submit(&mut self) -> Submission {
        let word = normalize_word(&self.path_letters());

        let verdict = if !self.solver.is_word(&word) {
            Verdict::Invalid
        } else if self.found_words.contains(&word) {
            Verdict::Duplicate
        } else {
            self.found_words.insert(word.clone());
            Verdict::New
        };

        let state = verdict.tile_state();
        for &index in &self.path {
            self.board.tile_at_mut(index).set_state(state);
        }

        self.word_submitted = true;
        debug!(%word, ?verdict, "word submitted");
        self.notifier.notify();

        Submission { word, verdict }
    }

    /// Return every path tile to `Up` and empty the path
    pub fn deselect_path(&mut self) {
        for &index in &self.path {
            self.board.tile_at_mut(index).set_state(TileState::Up);
        }
        self.path.clear();
        self.notifier.notify();
    }

    /// Notify observers without changing anything
    pub fn update_all(&mut self) {
        self.notifier.notify();
    }

    /// Register a callback run after every change
    ///
    /// Callbacks receive nothing; they read the grid afterwards.
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) {
        self.notifier.subscribe(listener);
    }

    /// Number of change notifications sent so far
    #[inline]
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.notifier.revision()
    }

    /// Side length of the grid (0 before the first load)
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Tile at `pos`
    ///
    /// # Errors
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid.
    pub fn tile(&self, pos: Position) -> Result<&Tile, GridError> {
        self.board.tile(pos)
    }

    /// Positions of the selected tiles, in selection order
    #[must_use]
    pub fn path(&self) -> Vec<Position> {
        self.path_tiles().map(Tile::position).collect()
    }

    /// Selected tiles, in selection order
    pub fn path_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.path.iter().map(|&index| self.board.tile_at(index))
    }

    /// Raw letters along the path, without `qu` expansion
    #[must_use]
    pub fn path_letters(&self) -> String {
        self.path_tiles().map(Tile::letter).collect()
    }

    /// Normalized word currently spelled by the path
    #[must_use]
    pub fn path_word(&self) -> String {
        normalize_word(&self.path_letters())
    }

    /// Whether the last gesture was a submission awaiting a fresh selection
    #[inline]
    #[must_use]
    pub const fn is_word_submitted(&self) -> bool {
        self.word_submitted
    }

    /// Words found this game
    #[inline]
    #[must_use]
    pub const fn found_words(&self) -> &FxHashSet<String> {
        &self.found_words
    }

    /// Every word the solver found for this grid
    #[must_use]
    pub fn possible_words(&self) -> &FxHashSet<String> {
        self.solver.words()
    }

    /// Score of the found words
    #[must_use]
    pub fn points(&self) -> i64 {
        total_points(&self.found_words)
    }

    /// Score attainable by finding every word on the grid
    #[must_use]
    pub fn possible_points(&self) -> i64 {
        total_points(self.solver.words())
    }

    #[inline]
    #[must_use]
    pub const fn solver(&self) -> &S {
        &self.solver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::letters::is_pool_letter;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Fixed dictionary; `solve` reports the dictionary words whose letters all
    /// appear on the board, which is enough for scoring tests.
    #[derive(Default)]
    struct FakeSolver {
        dictionary: FxHashSet<String>,
        words: FxHashSet<String>,
        solve_calls: usize,
    }

    impl FakeSolver {
        fn with_words(words: &[&str]) -> Self {
            Self {
                dictionary: words.iter().map(ToString::to_string).collect(),
                ..Self::default()
            }
        }
    }

    impl WordSolver for FakeSolver {
        fn solve(&mut self, board: &Board) {
            self.solve_calls += 1;
            let letters: String = board.tiles().iter().map(Tile::text).collect();
            self.words = self
                .dictionary
                .iter()
                .filter(|w| w.chars().all(|c| letters.contains(c)))
                .cloned()
                .collect();
        }

        fn words(&self) -> &FxHashSet<String> {
            &self.words
        }

        fn is_word(&self, candidate: &str) -> bool {
            self.dictionary.contains(&candidate.to_lowercase())
        }
    }

    fn letters(rows: &[&str]) -> Vec<Vec<char>> {
        rows.iter().map(|r| r.chars().collect()).collect()
    }

    fn cat_grid() -> LetterGrid<FakeSolver> {
        let mut grid = LetterGrid::new(FakeSolver::with_words(&["cat", "act"]));
        grid.load(&letters(&["cat", "xxx", "xxx"])).unwrap();
        grid
    }

    fn select_all(grid: &mut LetterGrid<FakeSolver>, cells: &[(usize, usize)]) {
        for &(row, col) in cells {
            grid.select(Position::new(row, col)).unwrap();
        }
    }

    fn state_at(grid: &LetterGrid<FakeSolver>, row: usize, col: usize) -> TileState {
        grid.tile(Position::new(row, col)).unwrap().state()
    }

    #[test]
    fn end_to_end_cat() {
        let mut grid = cat_grid();
        select_all(&mut grid, &[(0, 0), (0, 1), (0, 2)]);
        let submission = grid.submit();

        assert_eq!(submission.word, "cat");
        assert_eq!(submission.verdict, Verdict::New);
        assert_eq!(grid.found_words().len(), 1);
        assert!(grid.found_words().contains("cat"));
        assert_eq!(grid.points(), 1);
        for col in 0..3 {
            assert_eq!(state_at(&grid, 0, col), TileState::Good);
        }
        assert_eq!(state_at(&grid, 1, 1), TileState::Up);
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = LetterGrid::new(FakeSolver::default());
        assert_eq!(grid.size(), 0);
        assert!(grid.path().is_empty());
        assert!(grid.tile(Position::new(0, 0)).is_err());
    }

    #[test]
    fn load_resets_everything() {
        let mut grid = cat_grid();
        select_all(&mut grid, &[(0, 0), (0, 1), (0, 2)]);
        grid.submit();
        select_all(&mut grid, &[(1, 1)]);

        grid.load(&letters(&["dog", "xxx", "xxx"])).unwrap();

        assert!(grid.found_words().is_empty());
        assert!(grid.path().is_empty());
        assert!(!grid.is_word_submitted());
        assert!(grid.board().tiles().iter().all(|t| t.state() == TileState::Up));
        assert_eq!(grid.tile(Position::new(0, 0)).unwrap().letter(), 'd');
    }

    #[test]
    fn load_solves_each_time() {
        let mut grid = cat_grid();
        assert_eq!(grid.solver().solve_calls, 1);
        grid.load(&letters(&["ab", "cd"])).unwrap();
        assert_eq!(grid.solver().solve_calls, 2);
    }

    #[test]
    fn failed_load_keeps_previous_grid() {
        let mut grid = cat_grid();
        select_all(&mut grid, &[(0, 0), (0, 1)]);
        let revision = grid.revision();

        let err = grid.load(&letters(&["ab", "c"])).unwrap_err();
        assert!(matches!(err, GridError::InvalidDimensions { .. }));
        assert_eq!(grid.load(&[]), Err(GridError::InvalidDimensions { rows: 0, columns: 0 }));

        assert_eq!(grid.size(), 3);
        assert_eq!(grid.path_letters(), "ca");
        assert_eq!(grid.revision(), revision);
        assert_eq!(grid.solver().solve_calls, 1);
    }

    #[test]
    fn load_random_fills_grid() {
        let mut grid = LetterGrid::new(FakeSolver::default());
        let mut generator = LetterGenerator::with_seed(17);
        grid.load_random(4, &mut generator).unwrap();

        assert_eq!(grid.size(), 4);
        assert_eq!(grid.board().tiles().len(), 16);
        assert!(grid.board().tiles().iter().all(|t| is_pool_letter(t.letter())));
    }

    #[test]
    fn load_random_zero_is_rejected() {
        let mut grid = LetterGrid::new(FakeSolver::default());
        let mut generator = LetterGenerator::with_seed(17);
        assert!(matches!(
            grid.load_random(0, &mut generator),
            Err(GridError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn first_selection_always_extends() {
        let mut grid = cat_grid();
        assert_eq!(grid.select(Position::new(2, 2)), Ok(Selection::Extended));
        assert_eq!(state_at(&grid, 2, 2), TileState::Down);
    }

    #[test]
    fn non_adjacent_is_ignored() {
        let mut grid = cat_grid();
        select_all(&mut grid, &[(0, 0)]);
        let revision = grid.revision();

        assert_eq!(grid.select(Position::new(0, 2)), Ok(Selection::Ignored));
        assert_eq!(grid.select(Position::new(2, 0)), Ok(Selection::Ignored));
        assert_eq!(grid.path(), vec![Position::new(0, 0)]);
        assert_eq!(state_at(&grid, 0, 2), TileState::Up);
        assert_eq!(grid.revision(), revision);
    }

    #[test]
    fn diagonal_extends() {
        let mut grid = cat_grid();
        select_all(&mut grid, &[(0, 0)]);
        assert_eq!(grid.select(Position::new(1, 1)), Ok(Selection::Extended));
    }

    #[test]
    fn backtrack_removes_last_tile() {
        let mut grid = cat_grid();
        select_all(&mut grid, &[(0, 0), (0, 1), (0, 2)]);

        assert_eq!(grid.select(Position::new(0, 1)), Ok(Selection::Backtracked));
        assert_eq!(grid.path(), vec![Position::new(0, 0), Position::new(0, 1)]);
        assert_eq!(state_at(&grid, 0, 2), TileState::Up);
        assert_eq!(state_at(&grid, 0, 1), TileState::Down);

        assert_eq!(grid.select(Position::new(0, 0)), Ok(Selection::Backtracked));
        assert_eq!(grid.path(), vec![Position::new(0, 0)]);
    }

    #[test]
    fn single_tile_path_cannot_backtrack_to_empty() {
        let mut grid = cat_grid();
        select_all(&mut grid, &[(0, 0)]);
        assert_eq!(grid.select(Position::new(0, 0)), Ok(Selection::Ignored));
        assert_eq!(grid.path().len(), 1);

        grid.deselect_path();
        assert!(grid.path().is_empty());
        assert_eq!(state_at(&grid, 0, 0), TileState::Up);
    }

    #[test]
    fn reselecting_last_tile_is_ignored() {
        let mut grid = cat_grid();
        select_all(&mut grid, &[(0, 0), (0, 1)]);
        assert_eq!(grid.select(Position::new(0, 1)), Ok(Selection::Ignored));
        assert_eq!(grid.path().len(), 2);
    }

    #[test]
    fn earlier_path_tile_is_ignored() {
        let mut grid = cat_grid();
        // (0,0) is adjacent to (1,1) but sits before the second-to-last entry
        select_all(&mut grid, &[(0, 0), (0, 1), (1, 1)]);
        assert_eq!(grid.select(Position::new(0, 0)), Ok(Selection::Ignored));
        assert_eq!(grid.path().len(), 3);
    }

    #[test]
    fn out_of_bounds_select_is_an_error() {
        let mut grid = cat_grid();
        select_all(&mut grid, &[(0, 0), (0, 1), (0, 2)]);
        grid.submit();

        assert_eq!(
            grid.select(Position::new(3, 0)),
            Err(GridError::OutOfBounds {
                row: 3,
                col: 0,
                size: 3
            })
        );
        // The deferred clear did not run
        assert!(grid.is_word_submitted());
        assert_eq!(state_at(&grid, 0, 0), TileState::Good);
    }

    #[test]
    fn submission_marks_stay_until_next_selection() {
        let mut grid = cat_grid();
        select_all(&mut grid, &[(0, 0), (0, 1), (0, 2)]);
        grid.submit();
        assert!(grid.is_word_submitted());
        assert_eq!(grid.path().len(), 3);

        assert_eq!(grid.select(Position::new(2, 2)), Ok(Selection::Extended));
        assert!(!grid.is_word_submitted());
        assert_eq!(grid.path(), vec![Position::new(2, 2)]);
        for col in 0..3 {
            assert_eq!(state_at(&grid, 0, col), TileState::Up);
        }
    }

    #[test]
    fn duplicate_submission() {
        let mut grid = cat_grid();
        select_all(&mut grid, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(grid.submit().verdict, Verdict::New);

        select_all(&mut grid, &[(0, 0), (0, 1), (0, 2)]);
        let submission = grid.submit();
        assert_eq!(submission.verdict, Verdict::Duplicate);
        assert_eq!(grid.found_words().len(), 1);
        assert_eq!(grid.points(), 1);
        for col in 0..3 {
            assert_eq!(state_at(&grid, 0, col), TileState::Dupe);
        }
    }

    #[test]
    fn invalid_submission() {
        let mut grid = cat_grid();
        select_all(&mut grid, &[(0, 0), (1, 0), (2, 0)]);
        let submission = grid.submit();
        assert_eq!(submission.word, "cxx");
        assert_eq!(submission.verdict, Verdict::Invalid);
        assert!(grid.found_words().is_empty());
        assert_eq!(state_at(&grid, 1, 0), TileState::Bad);
    }

    #[test]
    fn empty_submission_is_invalid() {
        let mut grid = cat_grid();
        let submission = grid.submit();
        assert_eq!(submission.word, "");
        assert_eq!(submission.verdict, Verdict::Invalid);
        assert!(grid.is_word_submitted());
    }

    #[test]
    fn q_expands_to_qu() {
        let mut grid = LetterGrid::new(FakeSolver::with_words(&["quit"]));
        grid.load(&letters(&["qi", "tx"])).unwrap();
        select_all(&mut grid, &[(0, 0), (0, 1), (1, 0)]);

        assert_eq!(grid.path_letters(), "qit");
        let submission = grid.submit();
        assert_eq!(submission.word, "quit");
        assert_eq!(submission.verdict, Verdict::New);
        assert_eq!(grid.points(), 2);
    }

    #[test]
    fn points_sum_found_words() {
        let mut grid = LetterGrid::new(FakeSolver::with_words(&["cat", "dog", "program"]));
        grid.load(&letters(&["prog", "xmar", "catd", "xxog"])).unwrap();

        select_all(&mut grid, &[(2, 0), (2, 1), (2, 2)]);
        grid.submit();
        select_all(&mut grid, &[(2, 3), (3, 2), (3, 3)]);
        grid.submit();
        select_all(
            &mut grid,
            &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 3), (1, 2), (1, 1)],
        );
        assert_eq!(grid.submit().word, "program");

        assert_eq!(grid.found_words().len(), 3);
        assert_eq!(grid.points(), 7);
    }

    #[test]
    fn possible_points_use_solver_words() {
        let mut grid = LetterGrid::new(FakeSolver::with_words(&["cat", "act", "puzzle"]));
        grid.load(&letters(&["cat", "xxx", "xxx"])).unwrap();
        assert_eq!(grid.possible_words().len(), 2);
        assert_eq!(grid.possible_points(), 2);
    }

    #[test]
    fn notifications_follow_changes() {
        let calls = Rc::new(Cell::new(0));
        let mut grid = LetterGrid::new(FakeSolver::with_words(&["cat"]));
        let counter = Rc::clone(&calls);
        grid.subscribe(move || counter.set(counter.get() + 1));

        grid.load(&letters(&["cat", "xxx", "xxx"])).unwrap();
        assert_eq!(calls.get(), 2); // deselect + update

        select_all(&mut grid, &[(0, 0), (0, 1)]);
        assert_eq!(calls.get(), 4);

        grid.select(Position::new(2, 2)).unwrap();
        assert_eq!(calls.get(), 4);

        grid.select(Position::new(0, 0)).unwrap();
        assert_eq!(calls.get(), 5);

        grid.submit();
        assert_eq!(calls.get(), 6);

        // deferred clear + extend
        grid.select(Position::new(1, 1)).unwrap();
        assert_eq!(calls.get(), 8);

        grid.update_all();
        assert_eq!(calls.get(), 9);
        assert_eq!(grid.revision(), 9);
    }

    #[test]
    fn random_gestures_keep_path_invariant() {
        let mut grid = LetterGrid::new(FakeSolver::with_words(&["cat"]));
        let mut generator = LetterGenerator::with_seed(2);
        grid.load_random(5, &mut generator).unwrap();

        let mut rng = StdRng::seed_from_u64(9);
        for step in 0..2000 {
            if step % 37 == 0 {
                grid.submit();
            }
            let pos = Position::new(rng.random_range(0..5), rng.random_range(0..5));
            grid.select(pos).unwrap();

            let path = grid.path();
            for pair in path.windows(2) {
                assert!(pair[0].is_adjacent(pair[1]), "{path:?}");
            }
            let unique: FxHashSet<Position> = path.iter().copied().collect();
            assert_eq!(unique.len(), path.len());

            let down = grid
                .board()
                .tiles()
                .iter()
                .filter(|t| t.state() == TileState::Down)
                .count();
            assert_eq!(down, path.len());
        }
    }
}
