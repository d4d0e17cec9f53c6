//! Scale normalization for thresholds and energies.

use crate::error::{Result, TspError};
use crate::geometry::Scenario;
use crate::random::{permutation, unit_open};
use rand::Rng;

/// Relative size below which the normalizer counts as degenerate.
const DEGENERATE_RATIO: f64 = 1e-12;

/// Average edge length of `samples` random tours.
///
/// Each sample is the closed length of a uniformly random permutation,
/// divided by the node count. Scaling every coordinate by `k` scales
/// the result by `k` (for the same random draws).
///
/// Fails with [`TspError::DegenerateNormalizer`] when the value is not
/// finite or negligible compared to the coordinates, which happens when
/// all points (nearly) coincide.
pub fn distance_normalizer<R: Rng>(scenario: &Scenario, samples: usize, rng: &mut R) -> Result<f64> {
    let n = scenario.len();
    if n == 0 || samples == 0 {
        return Err(TspError::DegenerateNormalizer(0.0));
    }

    let total: f64 = (0..samples)
        .map(|_| scenario.tour_length(&permutation(n, rng)))
        .sum();
    let normalizer = total / samples as f64 / n as f64;

    let extent = scenario
        .points()
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(0.0_f64, f64::max);

    if !normalizer.is_finite() || normalizer <= extent * DEGENERATE_RATIO {
        return Err(TspError::DegenerateNormalizer(normalizer));
    }
    Ok(normalizer)
}

/// Draws an acceptance threshold `θ = -T · ln(U) · normalizer`.
///
/// The Metropolis criterion expressed on length deltas: a move with
/// delta `d` passes `d < θ` with probability `exp(-d / (T · normalizer))`
/// for `d > 0`. At zero temperature `θ = 0` (strict improvement).
pub fn random_threshold<R: Rng>(temperature: f64, normalizer: f64, rng: &mut R) -> f64 {
    -temperature * unit_open(rng).ln() * normalizer
}
