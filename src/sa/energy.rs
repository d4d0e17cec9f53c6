//! Per-position energies for adjacent-swap annealing.
//!
//! Entry `k` holds the normalized length change of exchanging the stops
//! at positions `k` and `k + 1`. It depends only on positions
//! `k - 1 ..= k + 2`, so a swap at `s` invalidates exactly the entries
//! `s - 2 ..= s + 2`. [`EnergyTable::refresh_after_swap`] recomputes
//! those and nothing else; every other entry stays valid.

use crate::tour::Tour;

/// Number of entries on each side of a swap that it invalidates.
const AFFECTED_RADIUS: usize = 2;

/// Normalized swap energies, one per adjacent pair of the cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyTable {
    energies: Vec<f64>,
    normalizer: f64,
}

impl EnergyTable {
    /// Computes every entry from scratch.
    pub fn build(tour: &Tour, normalizer: f64) -> Self {
        let energies = (0..tour.len())
            .map(|k| swap_energy(tour, k, normalizer))
            .collect();
        Self {
            energies,
            normalizer,
        }
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    #[inline]
    pub fn energy(&self, k: usize) -> f64 {
        self.energies[k]
    }

    /// Recomputes the entries invalidated by a swap at `swap`.
    ///
    /// `tour` must already reflect the swap.
    pub fn refresh_after_swap(&mut self, tour: &Tour, swap: usize) {
        for k in affected_positions(swap, self.energies.len()) {
            self.energies[k] = swap_energy(tour, k, self.normalizer);
        }
    }
}

/// Entries `swap - 2 ..= swap + 2` modulo `n`.
pub fn affected_positions(swap: usize, n: usize) -> impl Iterator<Item = usize> {
    let window = 2 * AFFECTED_RADIUS + 1;
    (0..window.min(n)).map(move |offset| (swap + n * AFFECTED_RADIUS + offset - AFFECTED_RADIUS) % n)
}

/// Normalized length change of exchanging positions `k` and `k + 1`.
///
/// With `a, b, c, d` at `k - 1 .. k + 2`, the swap replaces edges
/// `(a, b)` and `(c, d)` by `(a, c)` and `(b, d)`.
pub fn swap_energy(tour: &Tour, k: usize, normalizer: f64) -> f64 {
    let n = tour.len();
    let a = (k + n - 1) % n;
    let (b, c, d) = (k, k + 1, k + 2);
    let added = tour.edge(a, c) + tour.edge(b, d);
    let removed = tour.edge(a, b) + tour.edge(c, d);
    (added - removed) / normalizer
}

/// Probability of accepting a swap with `energy` at `temperature`:
/// `min(exp(-energy / temperature), 1)`.
///
/// At zero temperature only strictly improving swaps are certain.
#[inline]
pub fn acceptance_probability(energy: f64, temperature: f64) -> f64 {
    if temperature <= 0.0 {
        return if energy < 0.0 { 1.0 } else { 0.0 };
    }
    (-energy / temperature).exp().min(1.0)
}
