//! Permutation-based significance for one candidate.
//!
//! The observed score is never injected into its own null set, so an extreme
//! observation can legitimately get a p-value of exactly 0.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::TransientError;
use crate::schema::v1::Algorithm;
use crate::scores;

/// Independent per-row stream derived from the base seed. The row index is
/// scrambled first so neighbouring rows do not hand correlated seeds to the
/// generator.
pub fn row_rng(base_seed: u64, row: usize) -> StdRng {
    StdRng::seed_from_u64(base_seed ^ splitmix64(row as u64))
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Scores `monte_carlo` full reshuffles of the trajectory.
pub fn null_distribution<R: Rng>(
    trajectory: &[f64],
    algorithm: Algorithm,
    monte_carlo: usize,
    rng: &mut R,
) -> Result<Vec<f64>, TransientError> {
    let mut shuffled = trajectory.to_vec();
    let mut null = Vec::with_capacity(monte_carlo);
    for _ in 0..monte_carlo {
        shuffled.shuffle(rng);
        null.push(scores::score(algorithm, &shuffled)?);
    }
    Ok(null)
}

/// Two-sided empirical p-value: the fraction of null scores at least as
/// extreme in magnitude as the observed one.
pub fn empirical_pvalue(observed: f64, null: &[f64]) -> f64 {
    if null.is_empty() {
        return 1.0;
    }
    let extreme = null.iter().filter(|s| s.abs() >= observed.abs()).count();
    extreme as f64 / null.len() as f64
}

pub fn score_pvalue<R: Rng>(
    trajectory: &[f64],
    algorithm: Algorithm,
    monte_carlo: usize,
    rng: &mut R,
) -> Result<f64, TransientError> {
    let observed = scores::score(algorithm, trajectory)?;
    let null = null_distribution(trajectory, algorithm, monte_carlo, rng)?;
    Ok(empirical_pvalue(observed, &null))
}
