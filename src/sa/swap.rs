//! Adjacent-swap annealing over a precomputed energy table.
//!
//! The simpler annealing variant: the only move is exchanging two
//! neighbouring stops. Each iteration computes every swap's acceptance
//! probability `min(exp(-E / T), 1)`, draws one uniform number, and
//! applies a uniformly chosen swap among those whose probability exceeds
//! it. Iterations where no swap qualifies are skipped.

use super::config::SwapSaConfig;
use super::energy::{acceptance_probability, EnergyTable};
use super::normalizer::distance_normalizer;
use crate::construct::InitialTour;
use crate::deadline::Deadline;
use crate::error::Result;
use crate::geometry::{Scenario, MIN_NODES};
use crate::random::rng_from;
use crate::tour::{apply_swap, Tour};
use rand::Rng;
use std::time::Duration;

const HISTORY_INTERVAL: usize = 1_000;

/// Result of an adjacent-swap annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapSaResult {
    /// Final visiting order as scenario node ids.
    pub tour: Vec<usize>,

    /// Closed length of `tour`.
    pub length: f64,

    /// Length of the random starting tour.
    pub initial_length: f64,

    /// Number of iterations, including skipped ones.
    pub iterations: usize,

    /// Number of swaps applied.
    pub swaps: usize,

    /// Iterations in which no swap cleared the random draw.
    pub skipped: usize,

    /// Temperature at the last iteration.
    pub final_temperature: f64,

    /// Distance normalizer dividing the energies.
    pub normalizer: f64,

    /// Wall-clock time spent.
    pub elapsed: Duration,

    /// Tour length sampled every few iterations.
    pub length_history: Vec<f64>,
}

/// Executes adjacent-swap annealing.
pub struct SwapAnnealer;

impl SwapAnnealer {
    /// Anneals from a random tour for the configured time budget.
    pub fn run(scenario: &Scenario, config: &SwapSaConfig) -> Result<SwapSaResult> {
        config.validate()?;
        scenario.require_nodes(MIN_NODES)?;

        let deadline = Deadline::start(Some(config.time_limit_ms));
        let mut rng = rng_from(config.seed);
        let normalizer = distance_normalizer(scenario, config.normalizer_samples, &mut rng)?;
        let tour = InitialTour::Random.build(scenario, &mut rng);

        Ok(Self::anneal(tour, normalizer, config, deadline, &mut rng))
    }

    fn anneal<R: Rng>(
        mut tour: Tour,
        normalizer: f64,
        config: &SwapSaConfig,
        deadline: Deadline,
        rng: &mut R,
    ) -> SwapSaResult {
        let n = tour.len();
        let initial_length = tour.length();
        let mut table = EnergyTable::build(&tour, normalizer);
        let mut eligible: Vec<usize> = Vec::with_capacity(n);

        let mut iterations = 0usize;
        let mut swaps = 0usize;
        let mut skipped = 0usize;
        let mut temperature = config.cooling.temperature(0.0, config.cooling_scalar);
        let mut length_history = vec![initial_length];

        log::debug!(
            "swap annealing: n={n} normalizer={normalizer:.4} limit_ms={}",
            config.time_limit_ms
        );

        while !deadline.expired() {
            temperature = config
                .cooling
                .temperature(deadline.fraction(), config.cooling_scalar);
            let draw: f64 = rng.random();

            eligible.clear();
            eligible.extend(
                table
                    .energies()
                    .iter()
                    .enumerate()
                    .filter(|&(_, &e)| acceptance_probability(e, temperature) > draw)
                    .map(|(k, _)| k),
            );

            iterations += 1;

            if eligible.is_empty() {
                skipped += 1;
            } else {
                let swap = eligible[rng.random_range(0..eligible.len())];
                apply_swap(&mut tour, swap);
                table.refresh_after_swap(&tour, swap);
                swaps += 1;
            }

            if iterations % HISTORY_INTERVAL == 0 {
                length_history.push(tour.length());
            }
        }

        let length = tour.length();
        length_history.push(length);
        let elapsed = deadline.elapsed();

        log::info!(
            "swap annealing done: iterations={iterations} swaps={swaps} skipped={skipped} length={length:.3} elapsed_ms={}",
            elapsed.as_millis()
        );

        SwapSaResult {
            tour: tour.ids(),
            length,
            initial_length,
            iterations,
            swaps,
            skipped,
            final_temperature: temperature,
            normalizer,
            elapsed,
            length_history,
        }
    }
}
