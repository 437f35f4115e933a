//! Grid statistics command
//!
//! Samples many random grids to check the generator's letter proportions and
//! how many points a typical grid offers.

use crate::core::{Board, GridError, LetterGenerator, LetterMix, total_points};
use crate::solver::{Dictionary, find_words};
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Width of a possible-points histogram bucket
pub const POINTS_BUCKET: i64 = 10;

/// Aggregate statistics over sampled grids
pub struct StatsResult {
    pub grids: usize,
    pub size: usize,
    pub vowel_fraction: f64,
    pub hard_fraction: f64,
    pub regular_fraction: f64,
    pub average_words: f64,
    pub average_points: f64,
    pub min_points: i64,
    pub max_points: i64,
    /// Grid count per bucket of possible points, keyed by bucket start
    pub distribution: BTreeMap<i64, usize>,
    pub duration: Duration,
    pub grids_per_second: f64,
}

struct GridSample {
    mix: LetterMix,
    words: usize,
    points: i64,
}

/// Generate and solve `count` grids in parallel
///
/// Grid `i` is generated from seed `base_seed + i`, so a run is reproducible.
/// `progress` is advanced once per grid.
///
/// # Errors
///
/// Returns [`GridError::InvalidDimensions`] if `size` is zero.
pub fn run_stats(
    size: usize,
    count: usize,
    base_seed: u64,
    dictionary: &Dictionary,
    progress: &ProgressBar,
) -> Result<StatsResult, GridError> {
    let start = Instant::now();

    let samples = (0..count)
        .into_par_iter()
        .map(|i| -> Result<GridSample, GridError> {
            let mut generator = LetterGenerator::with_seed(base_seed.wrapping_add(i as u64));
            let (letters, mix) = generator.generate_with_mix(size);
            let board = Board::from_letters(&letters)?;
            let words = find_words(dictionary, &board);
            progress.inc(1);
            Ok(GridSample {
                mix,
                words: words.len(),
                points: total_points(&words),
            })
        })
        .collect::<Result<Vec<_>, GridError>>()?;

    let duration = start.elapsed();
    Ok(summarize(size, &samples, duration))
}

fn summarize(size: usize, samples: &[GridSample], duration: Duration) -> StatsResult {
    let grids = samples.len();
    let letters = (grids * size * size).max(1) as f64;
    let per_grid = grids.max(1) as f64;

    let vowels: usize = samples.iter().map(|s| s.mix.vowels).sum();
    let hard: usize = samples.iter().map(|s| s.mix.hard).sum();
    let regular: usize = samples.iter().map(|s| s.mix.regular).sum();
    let words: usize = samples.iter().map(|s| s.words).sum();
    let points: i64 = samples.iter().map(|s| s.points).sum();

    let mut distribution: BTreeMap<i64, usize> = BTreeMap::new();
    for sample in samples {
        let bucket = sample.points.div_euclid(POINTS_BUCKET) * POINTS_BUCKET;
        *distribution.entry(bucket).or_insert(0) += 1;
    }

    let seconds = duration.as_secs_f64();

    StatsResult {
        grids,
        size,
        vowel_fraction: vowels as f64 / letters,
        hard_fraction: hard as f64 / letters,
        regular_fraction: regular as f64 / letters,
        average_words: words as f64 / per_grid,
        average_points: points as f64 / per_grid,
        min_points: samples.iter().map(|s| s.points).min().unwrap_or(0),
        max_points: samples.iter().map(|s| s.points).max().unwrap_or(0),
        distribution,
        duration,
        grids_per_second: if seconds > 0.0 {
            grids as f64 / seconds
        } else {
            0.0
        },
    }
}
