//! Local search execution loop.
//!
//! # Algorithm
//!
//! 1. Build the initial tour (greedy or random)
//! 2. Query the enabled finders in priority order with `theta = 0`
//! 3. On a hit, apply the move and restart from the first finder
//! 4. When every finder is exhausted, stop as `Converged`
//!
//! The clock is checked before every finder query and inside each scan;
//! an expired budget ends the run as `TimeExpired` immediately.

use super::config::LocalSearchConfig;
use super::types::{LocalSearchResult, SearchState};
use crate::deadline::Deadline;
use crate::error::Result;
use crate::geometry::{Scenario, MIN_NODES};
use crate::moves::{find_move, Acceptance, MoveKind, SearchOutcome};
use crate::random::rng_from;
use crate::tour::{apply_move, Tour};
use rand::Rng;

/// Executes the local search driver.
pub struct LocalSearchRunner;

impl LocalSearchRunner {
    /// Builds the configured initial tour and descends to a local optimum.
    pub fn run(scenario: &Scenario, config: &LocalSearchConfig) -> Result<LocalSearchResult> {
        config.validate()?;
        scenario.require_nodes(MIN_NODES)?;

        let deadline = Deadline::start(config.time_limit_ms);
        let mut rng = rng_from(config.seed);
        let tour = config.initial.build(scenario, &mut rng);
        Ok(Self::search(tour, config, deadline, &mut rng))
    }

    /// Descends from a caller-supplied tour.
    pub fn improve(
        scenario: &Scenario,
        tour: Tour,
        config: &LocalSearchConfig,
    ) -> Result<LocalSearchResult> {
        config.validate()?;
        scenario.require_nodes(MIN_NODES)?;
        if !tour.belongs_to(scenario) {
            return Err(crate::error::TspError::invalid_tour(
                "tour does not match the scenario",
            ));
        }

        let deadline = Deadline::start(config.time_limit_ms);
        let mut rng = rng_from(config.seed);
        Ok(Self::search(tour, config, deadline, &mut rng))
    }

    fn search<R: Rng>(
        mut tour: Tour,
        config: &LocalSearchConfig,
        deadline: Deadline,
        rng: &mut R,
    ) -> LocalSearchResult {
        let mut state = SearchState::Initializing;
        let mut length = tour.length();
        let mut length_history = vec![length];
        let mut flips = 0usize;
        let mut relocations = 0usize;

        log::debug!(
            "local search: n={} moves={:?} limit_ms={:?} initial_length={length:.3}",
            tour.len(),
            config.moves,
            config.time_limit_ms
        );

        state = transition(state, SearchState::Searching);

        while !state.is_terminal() {
            let mut applied = false;

            for &kind in &config.moves {
                if deadline.expired() {
                    state = transition(state, SearchState::TimeExpired);
                    break;
                }

                match find_move(kind, &tour, Acceptance::improving(), &deadline, rng) {
                    SearchOutcome::Found(candidate) => {
                        apply_move(&mut tour, candidate.mv);
                        length += candidate.delta;
                        length_history.push(length);
                        match candidate.mv.kind() {
                            MoveKind::SegmentFlip => flips += 1,
                            MoveKind::NodeRelocation => relocations += 1,
                        }
                        log::trace!("applied {:?} delta={:.6}", candidate.mv, candidate.delta);
                        applied = true;
                        break;
                    }
                    SearchOutcome::Exhausted => {}
                    SearchOutcome::Interrupted => {
                        state = transition(state, SearchState::TimeExpired);
                        break;
                    }
                }
            }

            if !applied && !state.is_terminal() {
                state = transition(state, SearchState::Converged);
            }
        }

        let length = tour.length();
        let elapsed = deadline.elapsed();
        log::info!(
            "local search {state:?}: flips={flips} relocations={relocations} length={length:.3} elapsed_ms={}",
            elapsed.as_millis()
        );

        LocalSearchResult {
            tour: tour.ids(),
            length,
            state,
            flips,
            relocations,
            elapsed,
            length_history,
        }
    }
}

fn transition(from: SearchState, to: SearchState) -> SearchState {
    log::trace!("local search state {from:?} -> {to:?}");
    to
}
