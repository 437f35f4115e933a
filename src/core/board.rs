//! Tile arena and adjacency construction
//!
//! Tiles live in a flat row-major `Vec`; adjacency is stored per tile as a
//! list of arena indices, so the neighbor graph carries no references.

use super::error::GridError;
use super::tile::{Position, Tile};
use std::fmt;

/// Square arena of tiles with precomputed adjacency
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    size: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Build tiles from a square letter array and wire up neighbors
    ///
    /// Letters are lower-cased. Every tile is linked to each in-bounds tile
    /// whose row and column both differ by at most one, excluding itself.
    ///
    /// # Errors
    /// - [`GridError::InvalidDimensions`] if the array is empty or not square
    /// - [`GridError::InvalidLetter`] if a letter is not ASCII alphabetic
    ///
    /// # Examples
    /// ```
    /// use word_finder::core::{Board, Position};
    ///
    /// let letters = vec![vec!['a', 'b'], vec!['c', 'd']];
    /// let board = Board::from_letters(&letters).unwrap();
    /// assert_eq!(board.size(), 2);
    /// assert_eq!(board.tile(Position::new(1, 0)).unwrap().letter(), 'c');
    /// ```
    pub fn from_letters(letters: &[Vec<char>]) -> Result<Self, GridError> {
        let size = letters.len();
        if size == 0 {
            return Err(GridError::InvalidDimensions {
                rows: 0,
                columns: 0,
            });
        }
        if let Some(row) = letters.iter().find(|row| row.len() != size) {
            return Err(GridError::InvalidDimensions {
                rows: size,
                columns: row.len(),
            });
        }

        let mut tiles = Vec::with_capacity(size * size);
        for (row, line) in letters.iter().enumerate() {
            for (col, &letter) in line.iter().enumerate() {
                if !letter.is_ascii_alphabetic() {
                    return Err(GridError::InvalidLetter { letter });
                }
                tiles.push(Tile::new(
                    Position::new(row, col),
                    letter.to_ascii_lowercase(),
                ));
            }
        }

        for row in 0..size {
            for col in 0..size {
                let index = row * size + col;
                for dr in row.saturating_sub(1)..=(row + 1).min(size - 1) {
                    for dc in col.saturating_sub(1)..=(col + 1).min(size - 1) {
                        if dr != row || dc != col {
                            tiles[index].add_neighbor(dr * size + dc);
                        }
                    }
                }
            }
        }

        Ok(Self { size, tiles })
    }

    /// Side length of the grid (0 for an unloaded board)
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles in row-major order
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    /// Arena index of the tile at `pos`
    ///
    /// # Errors
    /// Returns [`GridError::OutOfBounds`] if `pos` lies outside the grid.
    pub fn index_of(&self, pos: Position) -> Result<usize, GridError> {
        if pos.row < self.size && pos.col < self.size {
            Ok(pos.row * self.size + pos.col)
        } else {
            Err(GridError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.size,
            })
        }
    }

    /// Tile at `pos`
    ///
    /// # Errors
    /// Returns [`GridError::OutOfBounds`] if `pos` lies outside the grid.
    pub fn tile(&self, pos: Position) -> Result<&Tile, GridError> {
        self.index_of(pos).map(|index| &self.tiles[index])
    }

    /// Tile at an arena index
    ///
    /// # Panics
    /// Panics if `index >= size * size`
    #[inline]
    #[must_use]
    pub fn tile_at(&self, index: usize) -> &Tile {
        &self.tiles[index]
    }

    pub(crate) fn tile_at_mut(&mut self, index: usize) -> &mut Tile {
        &mut self.tiles[index]
    }

    /// Letters as a square array, row-major
    #[must_use]
    pub fn letters(&self) -> Vec<Vec<char>> {
        self.tiles
            .chunks(self.size.max(1))
            .map(|row| row.iter().map(Tile::letter).collect())
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.size.max(1)) {
            let line: Vec<String> = row
                .iter()
                .map(|t| format!("{:<2}", display_letter(t.letter())))
                .collect();
            writeln!(f, "{}", line.join(" ").trim_end())?;
        }
        Ok(())
    }
}

/// Upper-case form shown on a tile face (`q` shows as `Qu`)
#[must_use]
pub fn display_letter(letter: char) -> String {
    if letter == 'q' {
        "Qu".to_string()
    } else {
        letter.to_ascii_uppercase().to_string()
    }
}

/// Parse a textual grid into a letter array
///
/// Rows are separated by `/`, `,`, newlines or whitespace. A single run of
/// letters whose length is a perfect square is split into rows. Squareness
/// is checked later by [`Board::from_letters`].
///
/// # Examples
/// ```
/// use word_finder::core::parse_letters;
///
/// let rows = parse_letters("cat/xxx/xxx");
/// assert_eq!(rows[0], vec!['c', 'a', 't']);
/// assert_eq!(parse_letters("abcd"), parse_letters("ab cd"));
/// ```
#[must_use]
pub fn parse_letters(text: &str) -> Vec<Vec<char>> {
    let rows: Vec<Vec<char>> = text
        .split(|c: char| c == '/' || c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| token.chars().map(|c| c.to_ascii_lowercase()).collect())
        .collect();

    if let [single] = rows.as_slice() {
        let side = single.len().isqrt();
        if side > 1 && side * side == single.len() {
            return single.chunks(side).map(<[char]>::to_vec).collect();
        }
    }

    rows
}
