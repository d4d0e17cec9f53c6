//! In-place tour mutation.
//!
//! Each operation touches only the positions between its endpoints and
//! keeps the tour a permutation of its original stops.

use super::Tour;
use crate::moves::Move;

/// Reverses positions `i + 1 ..= j - 1`.
///
/// Requires `i < j <= len`; `j == len` stands for position `0` of the
/// cycle, so the reversed range runs to the end of the sequence.
pub fn apply_flip(tour: &mut Tour, i: usize, j: usize) {
    debug_assert!(i < j && j <= tour.len(), "bad flip ({i}, {j})");
    tour.stops_mut()[i + 1..j].reverse();
}

/// Removes the stop at `i` and reinserts it immediately before the stop
/// that was at `j` before the removal.
///
/// Works in both directions; the elements between the two positions
/// shift by one toward the vacated slot.
pub fn apply_relocation(tour: &mut Tour, i: usize, j: usize) {
    debug_assert!(i < tour.len() && j < tour.len() && i != j, "bad relocation ({i}, {j})");
    let stops = tour.stops_mut();
    if i < j {
        // destination index drops by one once `i` is removed
        stops[i..j].rotate_left(1);
    } else {
        stops[j..=i].rotate_right(1);
    }
}

/// Exchanges the stops at `k` and `k + 1` (modulo the tour length).
pub fn apply_swap(tour: &mut Tour, k: usize) {
    let n = tour.len();
    tour.stops_mut().swap(k % n, (k + 1) % n);
}

/// Applies a confirmed move.
pub fn apply_move(tour: &mut Tour, mv: Move) {
    match mv {
        Move::SegmentFlip { i, j } => apply_flip(tour, i, j),
        Move::Relocation { i, j } => apply_relocation(tour, i, j),
    }
}
