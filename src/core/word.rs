//! Word normalization and scoring
//!
//! The tile alphabet encodes the `qu` digraph as a single `q` tile, so every
//! word read off the grid is expanded before it reaches the dictionary.

const LETTERS: [&str; 26] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "qu", "r",
    "s", "t", "u", "v", "w", "x", "y", "z",
];

/// Text a tile letter contributes to a word
///
/// Returns an empty string for anything outside `a..=z`.
#[inline]
#[must_use]
pub const fn tile_text(letter: char) -> &'static str {
    if letter.is_ascii_lowercase() {
        LETTERS[(letter as u8 - b'a') as usize]
    } else {
        ""
    }
}

/// Normalize the raw letters of a path into a dictionary word
///
/// Lower-cases the letters and expands every `q` to `qu`.
///
/// # Examples
/// ```
/// use word_finder::core::normalize_word;
///
/// assert_eq!(normalize_word("qit"), "quit");
/// assert_eq!(normalize_word("CAT"), "cat");
/// ```
#[must_use]
pub fn normalize_word(raw: &str) -> String {
    raw.to_lowercase().replace('q', "qu")
}

/// Points for a single word: its length minus two
///
/// Length is counted on the normalized form. There is no floor, so words
/// shorter than two letters score negatively.
///
/// # Examples
/// ```
/// use word_finder::core::word_points;
///
/// assert_eq!(word_points("cat"), 1);
/// assert_eq!(word_points("program"), 5);
/// ```
#[inline]
#[must_use]
pub fn word_points(word: &str) -> i64 {
    word.chars().count() as i64 - 2
}

/// Sum of [`word_points`] over a collection of words
pub fn total_points<'a, I>(words: I) -> i64
where
    I: IntoIterator<Item = &'a String>,
{
    words.into_iter().map(|w| word_points(w)).sum()
}
