//! Local search states and result.

use std::time::Duration;

/// Driver state. `Converged` and `TimeExpired` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    Initializing,
    Searching,
    /// Every enabled finder reported no improving move.
    Converged,
    /// The time limit was reached, possibly mid-scan.
    TimeExpired,
}

impl SearchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchState::Converged | SearchState::TimeExpired)
    }
}

/// Result of a local search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchResult {
    /// Final visiting order as scenario node ids.
    pub tour: Vec<usize>,

    /// Closed length of the final tour.
    pub length: f64,

    /// Terminal state reached.
    pub state: SearchState,

    /// Number of 2-opt moves applied.
    pub flips: usize,

    /// Number of relocations applied.
    pub relocations: usize,

    /// Wall-clock time spent.
    pub elapsed: Duration,

    /// Tour length before the first move and after every applied move.
    pub length_history: Vec<f64>,
}

impl LocalSearchResult {
    /// Total number of applied moves.
    pub fn moves_applied(&self) -> usize {
        self.flips + self.relocations
    }
}
