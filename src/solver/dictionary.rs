//! Dictionary lookup
//!
//! A flat word set plus the set of every proper prefix, enough to prune a
//! grid walk as soon as no word can continue it.

use crate::wordlists::DICTIONARY;
use rustc_hash::FxHashSet;

/// Shortest word accepted by the game
pub const MIN_WORD_LENGTH: usize = 3;

/// Case-insensitive dictionary of playable words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
    prefixes: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries are trimmed and lower-cased. Entries shorter than
    /// [`MIN_WORD_LENGTH`] or containing anything but ASCII letters are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_finder::solver::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["Cat", "at", "dog!"]);
    /// assert!(dictionary.contains("cat"));
    /// assert!(!dictionary.contains("at"));
    /// assert_eq!(dictionary.len(), 1);
    /// ```
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        for entry in entries {
            if let Some(word) = normalize_entry(entry.as_ref()) {
                dictionary.insert(word);
            }
        }
        dictionary
    }

    /// Dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(DICTIONARY)
    }

    fn insert(&mut self, word: String) {
        for (i, _) in word.char_indices().skip(1) {
            if !self.prefixes.contains(&word[..i]) {
                self.prefixes.insert(word[..i].to_string());
            }
        }
        self.words.insert(word);
    }

    /// Check if `word` is in the dictionary (case-insensitive)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.words.contains(&word.to_ascii_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Check if some longer word starts with `prefix`
    ///
    /// `prefix` must already be lower-case.
    #[inline]
    #[must_use]
    pub fn is_prefix(&self, prefix: &str) -> bool {
        self.prefixes.contains(prefix)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over every word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Normalize a raw dictionary entry, or `None` if it is not a usable word
#[must_use]
pub fn normalize_entry(entry: &str) -> Option<String> {
    let word = entry.trim().to_ascii_lowercase();
    (word.len() >= MIN_WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase())).then_some(word)
}
