//! Seeded random sources.
//!
//! Every run owns exactly one generator created here. Fixing the seed
//! fixes the scan orders of the move finders and every acceptance draw,
//! so whole runs replay deterministically (up to wall-clock cutoffs).

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a generator from an explicit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed, drawing a fresh one when absent.
pub fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// Shuffles a slice in place (Fisher-Yates).
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Returns a random permutation of `0..n`.
pub fn permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    shuffle(&mut perm, rng);
    perm
}

/// Uniform draw in `(0, 1]`.
///
/// Excludes zero so the result is always safe to pass to `ln`.
pub fn unit_open<R: Rng>(rng: &mut R) -> f64 {
    1.0 - rng.random::<f64>()
}
