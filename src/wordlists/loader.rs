//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::solver::normalize_entry;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns normalized words, skipping blank lines, `#` comments and entries
/// that are not playable words.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_finder::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert embedded string slice to normalized words
///
/// # Examples
/// ```
/// use word_finder::wordlists::loader::words_from_slice;
/// use word_finder::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .filter(|line| !line.trim_start().starts_with('#'))
        .filter_map(normalize_entry)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["Crane", "slate", " irate "];
        let words = words_from_slice(input);

        assert_eq!(words, ["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "ox", "", "don't", "# comment", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words, ["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("word_finder_{}.txt", std::process::id()));
        fs::write(&path, "cat\n\nDOG\nx\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, ["cat", "dog"]);
    }
}
