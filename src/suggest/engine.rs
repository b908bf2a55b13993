//! Candidate scanning over a word pool
//!
//! A pool word is playable when it would be accepted as the next move: its
//! distance to the head is positive and at most the threshold, and it has not
//! already been used in the chain.

use crate::core::distance;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Build the exclusion set for a chain
///
/// Words are compared case-normalized, matching the distance metric.
pub fn used_words<'a>(chain: impl Iterator<Item = &'a str>) -> FxHashSet<String> {
    chain.map(str::to_lowercase).collect()
}

/// Words from `pool` that would be legal moves against `head`
///
/// Excluded words (already in the chain) are skipped so a hint never repeats
/// the chain. Pool order is preserved.
#[must_use]
pub fn playable<'a>(
    pool: &'a [String],
    head: &str,
    threshold: usize,
    exclude: &FxHashSet<String>,
) -> Vec<&'a str> {
    pool.par_iter()
        .filter(|word| !exclude.contains(&word.to_lowercase()))
        .filter(|word| {
            let d = distance(head, word.as_str());
            d > 0 && d <= threshold
        })
        .map(String::as_str)
        .collect()
}

/// Pick one playable word uniformly at random, if any exist
pub fn random_hint<'a, R: Rng + ?Sized>(
    pool: &'a [String],
    head: &str,
    threshold: usize,
    exclude: &FxHashSet<String>,
    rng: &mut R,
) -> Option<&'a str> {
    playable(pool, head, threshold, exclude).choose(rng).copied()
}
