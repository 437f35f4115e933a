//! Formatting utilities for terminal output

use crate::core::{Tile, Verdict, display_letter};

/// Column header for a grid, e.g. `   a  b  c`
#[must_use]
pub fn column_header(size: usize) -> String {
    let labels: String = (0..size)
        .map(|col| {
            let label = char::from_u32(u32::from(b'a') + col as u32).unwrap_or('?');
            format!(" {label} ")
        })
        .collect();
    format!("  {labels}").trim_end().to_string()
}

/// Tile letter padded to a fixed-width cell (`Qu` fills it)
#[must_use]
pub fn tile_cell(tile: &Tile) -> String {
    format!(" {:<2}", display_letter(tile.letter()))
}

/// Short description of a submission verdict
#[must_use]
pub const fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::New => "new word",
        Verdict::Duplicate => "already found",
        Verdict::Invalid => "not a word",
    }
}

/// Group words by length, longest first, each group alphabetical
#[must_use]
pub fn words_by_length<'a, I>(words: I) -> Vec<(usize, Vec<&'a str>)>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut groups: Vec<(usize, Vec<&str>)> = Vec::new();
    let mut sorted: Vec<&str> = words.into_iter().map(String::as_str).collect();
    sorted.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    for word in sorted {
        match groups.last_mut() {
            Some((len, group)) if *len == word.len() => group.push(word),
            _ => groups.push((word.len(), vec![word])),
        }
    }
    groups
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Position};

    #[test]
    fn column_header_labels() {
        assert_eq!(column_header(3), "   a  b  c");
        assert_eq!(column_header(0), "");
    }

    #[test]
    fn tile_cells_have_equal_width() {
        let board = Board::from_letters(&[vec!['q', 'a'], vec!['b', 'c']]).unwrap();
        let q = tile_cell(board.tile(Position::new(0, 0)).unwrap());
        let a = tile_cell(board.tile(Position::new(0, 1)).unwrap());
        assert_eq!(q, " Qu");
        assert_eq!(a, " A ");
    }

    #[test]
    fn verdict_labels() {
        assert_eq!(verdict_label(Verdict::New), "new word");
        assert_eq!(verdict_label(Verdict::Duplicate), "already found");
        assert_eq!(verdict_label(Verdict::Invalid), "not a word");
    }

    #[test]
    fn groups_words_by_length() {
        let words: Vec<String> = ["cat", "tax", "cart", "act", "carts"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let groups = words_by_length(&words);
        assert_eq!(
            groups,
            vec![
                (5, vec!["carts"]),
                (4, vec!["cart"]),
                (3, vec!["act", "cat", "tax"]),
            ]
        );
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
