//! Threshold-driven annealing over flips and relocations.
//!
//! # Algorithm
//!
//! 1. Compute the distance normalizer and shuffle a random initial tour
//! 2. Each iteration until the budget is spent:
//!    a. `T = schedule(elapsed / limit) / cooling_scalar`
//!    b. Draw `θ = -T · ln(U) · normalizer`, `U ~ (0, 1]`
//!    c. Ask each enabled finder for a move with `delta < θ`, apply hits
//! 3. Return the shortest tour seen
//!
//! Drawing one threshold and accepting any move under it is the
//! Metropolis criterion applied to length deltas instead of comparing a
//! probability per move.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

use super::config::SaConfig;
use super::normalizer::{distance_normalizer, random_threshold};
use crate::construct::InitialTour;
use crate::deadline::Deadline;
use crate::error::Result;
use crate::geometry::{Scenario, MIN_NODES};
use crate::moves::{find_move, Acceptance, MoveKind, SearchOutcome};
use crate::random::rng_from;
use crate::tour::{apply_move, Tour};
use rand::Rng;
use std::time::Duration;

/// Iterations between two samples of `length_history`.
const HISTORY_INTERVAL: usize = 100;

/// Result of an annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// Shortest tour seen, as scenario node ids.
    pub tour: Vec<usize>,

    /// Length of `tour`.
    pub length: f64,

    /// Length of the tour the run ended on.
    pub final_length: f64,

    /// Length of the random starting tour.
    pub initial_length: f64,

    /// Number of iterations (threshold draws).
    pub iterations: usize,

    /// Number of 2-opt moves applied.
    pub flips: usize,

    /// Number of relocations applied.
    pub relocations: usize,

    /// Applied moves that made the tour longer.
    pub worsening_moves: usize,

    /// Temperature at the last iteration.
    pub final_temperature: f64,

    /// Distance normalizer used for the thresholds.
    pub normalizer: f64,

    /// Wall-clock time spent.
    pub elapsed: Duration,

    /// Current tour length sampled every few iterations.
    pub length_history: Vec<f64>,
}

/// Executes threshold-driven annealing.
pub struct SaRunner;

impl SaRunner {
    /// Anneals from a random tour for the configured time budget.
    pub fn run(scenario: &Scenario, config: &SaConfig) -> Result<SaResult> {
        config.validate()?;
        scenario.require_nodes(MIN_NODES)?;

        let deadline = Deadline::start(Some(config.time_limit_ms));
        let mut rng = rng_from(config.seed);
        let normalizer = distance_normalizer(scenario, config.normalizer_samples, &mut rng)?;
        let tour = InitialTour::Random.build(scenario, &mut rng);

        Ok(Self::anneal(tour, normalizer, config, deadline, &mut rng))
    }

    /// Anneals from a caller-supplied tour.
    pub fn run_from(scenario: &Scenario, tour: Tour, config: &SaConfig) -> Result<SaResult> {
        config.validate()?;
        scenario.require_nodes(MIN_NODES)?;
        if !tour.belongs_to(scenario) {
            return Err(crate::error::TspError::invalid_tour(
                "tour does not match the scenario",
            ));
        }

        let deadline = Deadline::start(Some(config.time_limit_ms));
        let mut rng = rng_from(config.seed);
        let normalizer = distance_normalizer(scenario, config.normalizer_samples, &mut rng)?;

        Ok(Self::anneal(tour, normalizer, config, deadline, &mut rng))
    }

    fn anneal<R: Rng>(
        mut tour: Tour,
        normalizer: f64,
        config: &SaConfig,
        deadline: Deadline,
        rng: &mut R,
    ) -> SaResult {
        let initial_length = tour.length();
        let mut length = initial_length;
        let mut best = tour.clone();
        let mut best_length = length;

        let mut iterations = 0usize;
        let mut flips = 0usize;
        let mut relocations = 0usize;
        let mut worsening_moves = 0usize;
        let mut temperature = config.cooling.temperature(0.0, config.cooling_scalar);
        let mut length_history = vec![length];

        log::debug!(
            "annealing: n={} normalizer={normalizer:.4} limit_ms={} cooling={:?}/{}",
            tour.len(),
            config.time_limit_ms,
            config.cooling,
            config.cooling_scalar
        );

        'outer: while !deadline.expired() {
            temperature = config
                .cooling
                .temperature(deadline.fraction(), config.cooling_scalar);
            let theta = random_threshold(temperature, normalizer, rng);
            let acceptance = Acceptance::below(theta);

            for &kind in &config.moves {
                if deadline.expired() {
                    break 'outer;
                }
                match find_move(kind, &tour, acceptance, &deadline, rng) {
                    SearchOutcome::Found(candidate) => {
                        apply_move(&mut tour, candidate.mv);
                        length += candidate.delta;
                        match candidate.mv.kind() {
                            MoveKind::SegmentFlip => flips += 1,
                            MoveKind::NodeRelocation => relocations += 1,
                        }
                        if candidate.delta > 0.0 {
                            worsening_moves += 1;
                        }
                        if length < best_length {
                            best_length = length;
                            best.clone_from(&tour);
                        }
                    }
                    SearchOutcome::Exhausted => {}
                    SearchOutcome::Interrupted => break 'outer,
                }
            }

            iterations += 1;
            if iterations % HISTORY_INTERVAL == 0 {
                length_history.push(length);
            }
        }

        let final_length = tour.length();
        length_history.push(final_length);

        // tracked lengths accumulate rounding; report exact values
        let best_exact = best.length();
        let (tour_ids, length) = if final_length <= best_exact {
            (tour.ids(), final_length)
        } else {
            (best.ids(), best_exact)
        };

        let elapsed = deadline.elapsed();
        log::info!(
            "annealing done: iterations={iterations} flips={flips} relocations={relocations} worsening={worsening_moves} length={length:.3} elapsed_ms={}",
            elapsed.as_millis()
        );

        SaResult {
            tour: tour_ids,
            length,
            final_length,
            initial_length,
            iterations,
            flips,
            relocations,
            worsening_moves,
            final_temperature: temperature,
            normalizer,
            elapsed,
            length_history,
        }
    }
}
