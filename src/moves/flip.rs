//! 2-opt segment-flip search.

use super::types::{Acceptance, Candidate, Move, MoveFinder, SearchOutcome};
use crate::deadline::Deadline;
use crate::random::shuffle;
use crate::tour::Tour;
use rand::Rng;

/// Finds a pair `(i, j)` whose open range reversal satisfies the
/// acceptance predicate.
///
/// Candidates are `i in 0..=n-2` and `j in i+3..=n`, where `j == n`
/// wraps to position `0`. The pair `(0, n)` would reverse the whole
/// tour and is skipped. Both the `i` order and, per `i`, the `j` order
/// are fresh random permutations.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentFlipFinder;

impl SegmentFlipFinder {
    /// Length delta of reversing positions `i + 1 ..= j - 1`.
    ///
    /// New edges `(i, j-1)` and `(i+1, j)` minus removed edges
    /// `(i, i+1)` and `(j-1, j)`, positions modulo `n`.
    #[inline]
    pub fn flip_delta(tour: &Tour, i: usize, j: usize) -> f64 {
        let (n1, n2, n3, n4) = (i, i + 1, j - 1, j);
        let added = tour.edge(n1, n3) + tour.edge(n2, n4);
        let removed = tour.edge(n1, n2) + tour.edge(n3, n4);
        added - removed
    }
}

impl MoveFinder for SegmentFlipFinder {
    fn find<R: Rng>(
        &self,
        tour: &Tour,
        acceptance: Acceptance,
        deadline: &Deadline,
        rng: &mut R,
    ) -> SearchOutcome {
        let n = tour.len();
        if n < 4 {
            return SearchOutcome::Exhausted;
        }

        let mut starts: Vec<usize> = (0..n - 1).collect();
        shuffle(&mut starts, rng);
        let mut ends: Vec<usize> = Vec::with_capacity(n);

        for &i in &starts {
            if deadline.expired() {
                return SearchOutcome::Interrupted;
            }

            ends.clear();
            ends.extend((i + 3..=n).filter(|&j| !(i == 0 && j == n)));
            shuffle(&mut ends, rng);

            for &j in &ends {
                let delta = Self::flip_delta(tour, i, j);
                if acceptance.accepts(delta) {
                    return SearchOutcome::Found(Candidate {
                        mv: Move::SegmentFlip { i, j },
                        delta,
                    });
                }
            }
        }

        SearchOutcome::Exhausted
    }
}
