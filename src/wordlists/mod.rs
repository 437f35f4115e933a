//! Word lists for the dictionary solver
//!
//! Provides the embedded dictionary compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_words_are_lowercase() {
        for &word in DICTIONARY {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_words_are_playable_length() {
        for &word in DICTIONARY {
            assert!(word.len() >= 3, "Word '{word}' is shorter than 3 letters");
        }
    }

    #[test]
    fn dictionary_has_qu_words() {
        assert!(DICTIONARY.contains(&"queen"));
        assert!(DICTIONARY.contains(&"quit"));
    }
}
