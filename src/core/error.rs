//! Grid error types

use derive_more::{Display, Error};

/// Errors raised by grid construction and tile access
///
/// Selection misses (non-adjacent tile, reused tile, wrong backtrack target)
/// are not errors; they surface as [`Selection::Ignored`](super::Selection::Ignored).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// Letter array is empty or not square
    #[display("Grid must be square and non-empty, got {rows} rows with a row of {columns} columns")]
    InvalidDimensions { rows: usize, columns: usize },

    /// Tile coordinates outside `[0, size)`
    #[display("Tile ({row}, {col}) is outside a {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// Letter outside the a-z tile alphabet
    #[display("Tile letter {letter:?} is not an ASCII letter")]
    InvalidLetter { letter: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_dimensions() {
        let err = GridError::InvalidDimensions {
            rows: 3,
            columns: 2,
        };
        assert_eq!(
            err.to_string(),
            "Grid must be square and non-empty, got 3 rows with a row of 2 columns"
        );
    }

    #[test]
    fn display_out_of_bounds() {
        let err = GridError::OutOfBounds {
            row: 4,
            col: 0,
            size: 4,
        };
        assert_eq!(err.to_string(), "Tile (4, 0) is outside a 4x4 grid");
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&GridError::InvalidLetter { letter: '7' });
    }
}
