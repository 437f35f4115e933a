//! Grid tiles
//!
//! A tile holds a fixed coordinate and letter, a mutable selection state and
//! the arena indices of its neighbors.

use std::fmt;

/// Zero-based grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether two positions touch (Chebyshev distance exactly 1)
    ///
    /// # Examples
    /// ```
    /// use word_finder::core::Position;
    ///
    /// assert!(Position::new(1, 1).is_adjacent(Position::new(0, 0)));
    /// assert!(!Position::new(1, 1).is_adjacent(Position::new(1, 1)));
    /// assert!(!Position::new(0, 0).is_adjacent(Position::new(0, 2)));
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        let distance = if dr > dc { dr } else { dc };
        distance == 1
    }

    /// Label in `a1` form: column letter, then one-based row number
    #[must_use]
    pub fn label(self) -> String {
        let column = char::from_u32(u32::from(b'a') + self.col as u32).unwrap_or('?');
        format!("{column}{}", self.row + 1)
    }

    /// Parse an `a1`-style label (column letter, one-based row number)
    ///
    /// # Examples
    /// ```
    /// use word_finder::core::Position;
    ///
    /// assert_eq!(Position::from_label("c4"), Some(Position::new(3, 2)));
    /// assert_eq!(Position::from_label("B1"), Some(Position::new(0, 1)));
    /// assert_eq!(Position::from_label("a0"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.trim().chars();
        let column = chars.next()?.to_ascii_lowercase();
        if !column.is_ascii_lowercase() {
            return None;
        }
        let row: usize = chars.as_str().parse().ok()?;
        let row = row.checked_sub(1)?;
        Some(Self::new(row, (column as u8 - b'a') as usize))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Visual/selection state of a tile
///
/// `Good`, `Bad` and `Dupe` are result states applied on submission and
/// cleared by the next selection gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    /// Idle
    #[default]
    Up,
    /// Part of the path being built
    Down,
    /// Part of a newly accepted word
    Good,
    /// Part of a rejected word
    Bad,
    /// Part of a word that was already found
    Dupe,
}

impl TileState {
    /// Whether this is one of the post-submission result states
    #[inline]
    #[must_use]
    pub const fn is_result(self) -> bool {
        matches!(self, Self::Good | Self::Bad | Self::Dupe)
    }
}

/// A single letter cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    position: Position,
    letter: char,
    state: TileState,
    neighbors: Vec<usize>,
}

impl Tile {
    pub(crate) const fn new(position: Position, letter: char) -> Self {
        Self {
            position,
            letter,
            state: TileState::Up,
            neighbors: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.position.row
    }

    #[inline]
    #[must_use]
    pub const fn col(&self) -> usize {
        self.position.col
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> char {
        self.letter
    }

    /// Letters this tile contributes to a word (`q` reads as `qu`)
    #[inline]
    #[must_use]
    pub const fn text(&self) -> &'static str {
        super::word::tile_text(self.letter)
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> TileState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: TileState) {
        self.state = state;
    }

    /// Arena indices of adjacent tiles, in row-major order
    #[inline]
    #[must_use]
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    pub(crate) fn add_neighbor(&mut self, index: usize) {
        self.neighbors.push(index);
    }

    /// Check if the tile at `index` is one of this tile's neighbors
    #[inline]
    #[must_use]
    pub fn is_neighbor(&self, index: usize) -> bool {
        self.neighbors.contains(&index)
    }
}
