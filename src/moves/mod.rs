//! Move finders for tour improvement.
//!
//! Both finders share one interface parameterized by an [`Acceptance`]
//! predicate (`delta < theta`). The local search driver queries them
//! with `theta = 0`; the annealing engine with a random positive draw.
//!
//! - [`SegmentFlipFinder`]: 2-opt, reverses a contiguous sub-path
//! - [`NodeRelocationFinder`]: moves one node to another position
//!
//! # References
//!
//! - Croes (1958), "A Method for Solving Traveling-Salesman Problems"
//! - Or (1976), "Traveling Salesman-Type Combinatorial Problems and their
//!   Relation to the Logistics of Regional Blood Banking"

mod flip;
mod relocation;
mod types;

pub use flip::SegmentFlipFinder;
pub use relocation::NodeRelocationFinder;
pub use types::{Acceptance, Candidate, Move, MoveFinder, MoveKind, SearchOutcome};

use crate::deadline::Deadline;
use crate::tour::Tour;
use rand::Rng;

/// Queries the finder for `kind`.
pub fn find_move<R: Rng>(
    kind: MoveKind,
    tour: &Tour,
    acceptance: Acceptance,
    deadline: &Deadline,
    rng: &mut R,
) -> SearchOutcome {
    match kind {
        MoveKind::SegmentFlip => SegmentFlipFinder.find(tour, acceptance, deadline, rng),
        MoveKind::NodeRelocation => NodeRelocationFinder.find(tour, acceptance, deadline, rng),
    }
}
