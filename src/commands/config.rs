//! Game configuration assembled from CLI flags

use crate::core::LetterGenerator;
use crate::solver::{Dictionary, DictionarySolver};
use crate::wordlists::loader::load_from_file;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

/// Where dictionary words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// Word list compiled into the binary
    Embedded,
    /// Newline-separated word list on disk
    File(PathBuf),
}

impl DictionarySource {
    /// Interpret a `--dictionary` argument: `embedded` or a file path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load the dictionary
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a dictionary file cannot be read.
    pub fn load(&self) -> io::Result<Dictionary> {
        let dictionary = match self {
            Self::Embedded => Dictionary::embedded(),
            Self::File(path) => Dictionary::new(load_from_file(path)?),
        };

        if dictionary.is_empty() {
            warn!(source = ?self, "dictionary has no playable words");
        } else {
            info!(words = dictionary.len(), source = ?self, "dictionary loaded");
        }

        Ok(dictionary)
    }
}

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Grid side length
    pub size: usize,
    /// Seed for reproducible grids; random when `None`
    pub seed: Option<u64>,
    pub dictionary: DictionarySource,
}

impl GameConfig {
    pub const DEFAULT_SIZE: usize = 4;

    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self {
            size,
            seed: None,
            dictionary: DictionarySource::Embedded,
        }
    }

    /// Letter generator honoring the configured seed
    #[must_use]
    pub fn generator(&self) -> LetterGenerator {
        self.seed
            .map_or_else(LetterGenerator::from_entropy, LetterGenerator::with_seed)
    }

    /// Solver over the configured dictionary
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a dictionary file cannot be read.
    pub fn solver(&self) -> io::Result<DictionarySolver> {
        self.dictionary.load().map(DictionarySolver::new)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}
