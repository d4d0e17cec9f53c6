//! Ant colony execution loop.
//!
//! # Algorithm
//!
//! 1. Seed every edge with `1 / (n · L_greedy)`
//! 2. Each iteration:
//!    a. Every ant builds a closed route from a random start, choosing the
//!    next node with probability ∝ `τ^alpha · (1/d)^beta`
//!    b. Evaporate, then deposit `1 / L` on every edge of every route
//!    c. Stop once the colony has converged
//! 3. Return the shortest route any ant built
//!
//! # Reference
//!
//! Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//! Colony of Cooperating Agents"

use super::config::AcoConfig;
use super::pheromones::{produced_pheromones, Pheromones};
use crate::construct::greedy;
use crate::deadline::Deadline;
use crate::error::Result;
use crate::geometry::{Scenario, MIN_NODES};
use crate::random::rng_from;
use rand::Rng;
use std::time::Duration;

/// Floor for distances in the heuristic, so coincident points stay finite.
const MIN_DISTANCE: f64 = 1e-12;

/// Result of an ant colony run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Shortest route built by any ant, as scenario node ids.
    pub tour: Vec<usize>,

    /// Closed length of `tour`.
    pub length: f64,

    /// Iterations executed.
    pub iterations: usize,

    /// Whether the run ended because the pheromones converged.
    pub converged: bool,

    /// Wall-clock time spent.
    pub elapsed: Duration,

    /// Best length after each iteration.
    pub length_history: Vec<f64>,
}

/// Executes ant colony optimization.
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the colony until convergence, the iteration cap or the time limit.
    pub fn run(scenario: &Scenario, config: &AcoConfig) -> Result<AcoResult> {
        config.validate()?;
        scenario.require_nodes(MIN_NODES)?;

        let deadline = Deadline::start(config.time_limit_ms);
        let mut rng = rng_from(config.seed);
        let n = scenario.len();
        let distances = scenario.distance_matrix();

        let greedy_route = greedy(scenario);
        let greedy_length = scenario.tour_length(&greedy_route);
        let initial = if greedy_length > 0.0 {
            1.0 / (n as f64 * greedy_length)
        } else {
            1.0
        };
        let mut pheromones = Pheromones::new(n, initial);

        let mut best: Option<(Vec<usize>, f64)> = None;
        let mut length_history = Vec::with_capacity(config.max_iterations);
        let mut iterations = 0usize;
        let mut converged = false;

        log::debug!(
            "ant colony: n={n} ants={} alpha={} beta={} evaporation={}",
            config.ants,
            config.alpha,
            config.beta,
            config.evaporation
        );

        while iterations < config.max_iterations && !deadline.expired() {
            let routes: Vec<Vec<usize>> = (0..config.ants)
                .map(|_| produce_ant_route(&pheromones, &distances, config, &mut rng))
                .collect();

            for route in &routes {
                let length = scenario.tour_length(route);
                if best.as_ref().map_or(true, |(_, best_len)| length < *best_len) {
                    best = Some((route.clone(), length));
                }
            }

            let produced = produced_pheromones(&routes, &distances);
            pheromones.update(&produced, config.evaporation);
            iterations += 1;

            let best_length = best.as_ref().map_or(f64::INFINITY, |(_, len)| *len);
            length_history.push(best_length);
            log::trace!("ant colony iteration {iterations}: best={best_length:.3}");

            if pheromones.converged(config.convergence_threshold) {
                converged = true;
                break;
            }
        }

        let (tour, length) = best.unwrap_or((greedy_route, greedy_length));
        let elapsed = deadline.elapsed();
        log::info!(
            "ant colony done: iterations={iterations} converged={converged} length={length:.3} elapsed_ms={}",
            elapsed.as_millis()
        );

        Ok(AcoResult {
            tour,
            length,
            iterations,
            converged,
            elapsed,
            length_history,
        })
    }
}

/// Builds one ant's route from a random start node.
pub fn produce_ant_route<R: Rng>(
    pheromones: &Pheromones,
    distances: &[Vec<f64>],
    config: &AcoConfig,
    rng: &mut R,
) -> Vec<usize> {
    let n = distances.len();
    let mut visited = vec![false; n];
    let mut route = Vec::with_capacity(n);

    let start = rng.random_range(0..n);
    visited[start] = true;
    route.push(start);

    while route.len() < n {
        let current = route[route.len() - 1];
        let next = next_node(current, &visited, pheromones, distances, config, rng);
        visited[next] = true;
        route.push(next);
    }

    route
}

/// Roulette-wheel choice among unvisited nodes.
fn next_node<R: Rng>(
    current: usize,
    visited: &[bool],
    pheromones: &Pheromones,
    distances: &[Vec<f64>],
    config: &AcoConfig,
    rng: &mut R,
) -> usize {
    let weights: Vec<(usize, f64)> = visited
        .iter()
        .enumerate()
        .filter(|&(_, &seen)| !seen)
        .map(|(node, _)| {
            let tau = pheromones.get(current, node).powf(config.alpha);
            let eta = (1.0 / distances[current][node].max(MIN_DISTANCE)).powf(config.beta);
            (node, tau * eta)
        })
        .collect();

    let total: f64 = weights.iter().map(|&(_, w)| w).sum();
    if !(total.is_finite() && total > 0.0) {
        return weights[rng.random_range(0..weights.len())].0;
    }

    let mut pick = rng.random::<f64>() * total;
    for &(node, weight) in &weights {
        if pick < weight {
            return node;
        }
        pick -= weight;
    }
    // rounding can leave a sliver past the last weight
    weights[weights.len() - 1].0
}
