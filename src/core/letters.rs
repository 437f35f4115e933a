//! Random letter generation
//!
//! Letters are drawn from three pools (regular consonants, vowels and hard
//! letters) in randomized proportions that favor playable grids. Each draw is
//! inserted at a random position of the growing sequence, which interleaves
//! the pools uniformly without a separate shuffle.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Common consonants
pub const REGULAR_LETTERS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'k', 'l', 'm', 'n', 'p', 'r', 's', 't', 'w', 'y',
];

/// Vowels
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Rare letters; `k` is deliberately shared with the regular pool
pub const HARD_LETTERS: &[char] = &['j', 'q', 'k', 'z', 'x', 'v'];

/// Expected fraction of hard letters
const HARD_FRACTION: f64 = 0.1875;

/// How many letters a grid draws from each pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterMix {
    pub regular: usize,
    pub vowels: usize,
    pub hard: usize,
}

impl LetterMix {
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.regular + self.vowels + self.hard
    }
}

/// Generates square letter arrays
pub struct LetterGenerator<R: Rng = StdRng> {
    rng: R,
}

impl LetterGenerator<StdRng> {
    /// Generator seeded from the operating system
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible generator
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for LetterGenerator<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> LetterGenerator<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw the pool sizes for a grid holding `length` letters
    ///
    /// - hard: `length * 0.1875` stochastically rounded
    /// - vowels: uniform over `[length / 4, length * 7 / 16]`
    /// - regular: the remainder
    ///
    /// Hard and vowel counts are clamped so the remainder is never negative.
    pub fn mix(&mut self, length: usize) -> LetterMix {
        let hard = (length as f64 * HARD_FRACTION + self.rng.random::<f64>()).floor() as usize;
        let vowels = self.rng.random_range(length / 4..=length * 7 / 16);

        let vowels = vowels.min(length);
        let hard = hard.min(length - vowels);

        LetterMix {
            regular: length - vowels - hard,
            vowels,
            hard,
        }
    }

    /// Generate a `size` x `size` letter array, filled row-major
    ///
    /// # Examples
    /// ```
    /// use word_finder::core::LetterGenerator;
    ///
    /// let letters = LetterGenerator::with_seed(7).generate(4);
    /// assert_eq!(letters.len(), 4);
    /// assert!(letters.iter().all(|row| row.len() == 4));
    /// ```
    pub fn generate(&mut self, size: usize) -> Vec<Vec<char>> {
        self.generate_with_mix(size).0
    }

    /// Generate a letter array and report the pool sizes it was drawn from
    #[instrument(skip(self))]
    pub fn generate_with_mix(&mut self, size: usize) -> (Vec<Vec<char>>, LetterMix) {
        let length = size * size;
        let mix = self.mix(length);
        debug!(?mix, "letter mix");

        let mut sequence: Vec<char> = Vec::with_capacity(length);
        for (pool, count) in [
            (REGULAR_LETTERS, mix.regular),
            (VOWELS, mix.vowels),
            (HARD_LETTERS, mix.hard),
        ] {
            for _ in 0..count {
                let letter = pool[self.rng.random_range(0..pool.len())];
                let at = self.rng.random_range(0..=sequence.len());
                sequence.insert(at, letter);
            }
        }

        let letters: Vec<Vec<char>> = sequence.chunks(size.max(1)).map(<[char]>::to_vec).collect();
        (letters, mix)
    }
}

/// Check whether a letter belongs to any generator pool
#[must_use]
pub fn is_pool_letter(letter: char) -> bool {
    REGULAR_LETTERS.contains(&letter) || VOWELS.contains(&letter) || HARD_LETTERS.contains(&letter)
}
