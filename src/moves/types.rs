//! Move values and the finder interface.

use crate::deadline::Deadline;
use crate::tour::Tour;
use rand::Rng;

/// The move classes a driver can search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    /// 2-opt: reverse a contiguous sub-path.
    SegmentFlip,
    /// Or-opt with a single node: move one node elsewhere in the cycle.
    NodeRelocation,
}

/// A candidate mutation of a tour, in tour positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Reverse the positions strictly between `i` and `j` (`i < j <= len`).
    SegmentFlip { i: usize, j: usize },
    /// Remove the node at `i` and reinsert it immediately before `j`.
    Relocation { i: usize, j: usize },
}

impl Move {
    pub fn kind(&self) -> MoveKind {
        match self {
            Move::SegmentFlip { .. } => MoveKind::SegmentFlip,
            Move::Relocation { .. } => MoveKind::NodeRelocation,
        }
    }
}

/// A move together with the signed change in tour length it causes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub mv: Move,
    pub delta: f64,
}

/// Acceptance predicate: a move qualifies when `delta < theta`.
///
/// `theta = 0` is strict hill-climbing. Annealing passes a positive,
/// randomly drawn `theta` to let slightly worsening moves through.
/// Only the strict comparison is ever used, never equality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Acceptance {
    theta: f64,
}

impl Acceptance {
    /// Only strictly improving moves.
    pub const fn improving() -> Self {
        Self { theta: 0.0 }
    }

    /// Moves with `delta < theta`.
    pub const fn below(theta: f64) -> Self {
        Self { theta }
    }

    #[inline]
    pub fn accepts(&self, delta: f64) -> bool {
        delta < self.theta
    }
}

impl Default for Acceptance {
    fn default() -> Self {
        Self::improving()
    }
}

/// Result of one finder query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchOutcome {
    /// First qualifying move in scan order.
    Found(Candidate),
    /// Every candidate was evaluated and none qualified.
    Exhausted,
    /// The deadline expired before the scan finished.
    Interrupted,
}

impl SearchOutcome {
    pub fn candidate(&self) -> Option<Candidate> {
        match self {
            SearchOutcome::Found(c) => Some(*c),
            _ => None,
        }
    }
}

/// Searches one move class of a tour.
///
/// Implementations scan candidates in a random order drawn from `rng`
/// and return the first one the acceptance predicate admits. A scan
/// visits each candidate at most once.
pub trait MoveFinder {
    /// Finds the first admissible move in randomized scan order.
    fn find<R: Rng>(
        &self,
        tour: &Tour,
        acceptance: Acceptance,
        deadline: &Deadline,
        rng: &mut R,
    ) -> SearchOutcome;
}
