//! Single-node relocation search (Or-opt with segment length one).

use super::types::{Acceptance, Candidate, Move, MoveFinder, SearchOutcome};
use crate::deadline::Deadline;
use crate::random::shuffle;
use crate::tour::Tour;
use rand::Rng;

/// Destinations closer than this (cyclically) to the source are skipped:
/// they are either no-ops or adjacent exchanges the flip finder covers.
const MIN_GAP: usize = 3;

/// Finds a node at position `i` and a destination `j` such that moving
/// the node to just before `j` satisfies the acceptance predicate.
///
/// Sources are all positions; destinations are all positions at cyclic
/// distance at least three from the source. Scan order is randomized
/// the same way as [`SegmentFlipFinder`](super::SegmentFlipFinder).
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeRelocationFinder;

impl NodeRelocationFinder {
    /// Length delta of moving the node at `i` to just before `j`.
    ///
    /// Removed edges `(i-1, i)`, `(i, i+1)`, `(j-1, j)`; added edges
    /// `(i-1, i+1)`, `(j-1, i)`, `(i, j)`. Valid whenever `i` and `j`
    /// are at least [`MIN_GAP`] apart on the cycle.
    #[inline]
    pub fn relocation_delta(tour: &Tour, i: usize, j: usize) -> f64 {
        let n = tour.len();
        let prev = (i + n - 1) % n;
        let next = i + 1;
        let before = (j + n - 1) % n;

        let removed = tour.edge(prev, i) + tour.edge(i, next) + tour.edge(before, j);
        let added = tour.edge(prev, next) + tour.edge(before, i) + tour.edge(i, j);
        added - removed
    }

    /// Cyclic distance between two positions.
    #[inline]
    fn gap(i: usize, j: usize, n: usize) -> usize {
        let d = i.abs_diff(j);
        d.min(n - d)
    }
}

impl MoveFinder for NodeRelocationFinder {
    fn find<R: Rng>(
        &self,
        tour: &Tour,
        acceptance: Acceptance,
        deadline: &Deadline,
        rng: &mut R,
    ) -> SearchOutcome {
        let n = tour.len();
        if n < 2 * MIN_GAP {
            return SearchOutcome::Exhausted;
        }

        let mut sources: Vec<usize> = (0..n).collect();
        shuffle(&mut sources, rng);
        let mut destinations: Vec<usize> = Vec::with_capacity(n);

        for &i in &sources {
            if deadline.expired() {
                return SearchOutcome::Interrupted;
            }

            destinations.clear();
            destinations.extend((0..n).filter(|&j| Self::gap(i, j, n) >= MIN_GAP));
            shuffle(&mut destinations, rng);

            for &j in &destinations {
                let delta = Self::relocation_delta(tour, i, j);
                if acceptance.accepts(delta) {
                    return SearchOutcome::Found(Candidate {
                        mv: Move::Relocation { i, j },
                        delta,
                    });
                }
            }
        }

        SearchOutcome::Exhausted
    }
}
