//! Initial tour construction.
//!
//! - [`greedy`]: nearest unvisited neighbour, starting at node 0
//! - [`random_walk`]: uniformly random permutation

use crate::geometry::Scenario;
use crate::random::permutation;
use crate::tour::Tour;
use rand::Rng;

/// How a driver builds the tour it starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitialTour {
    /// Nearest-neighbour construction.
    #[default]
    Greedy,
    /// Random shuffle of the nodes.
    Random,
}

impl InitialTour {
    pub fn build<R: Rng>(self, scenario: &Scenario, rng: &mut R) -> Tour {
        let order = match self {
            InitialTour::Greedy => greedy(scenario),
            InitialTour::Random => random_walk(scenario, rng),
        };
        Tour::from_order_unchecked(scenario, &order)
    }
}

/// Nearest-unvisited-neighbour order starting at node 0. O(n²).
///
/// Ties go to the lowest node id.
pub fn greedy(scenario: &Scenario) -> Vec<usize> {
    let n = scenario.len();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut route = Vec::with_capacity(n);
    let mut current = 0;
    visited[0] = true;
    route.push(0);

    while route.len() < n {
        let mut nearest = None;
        let mut nearest_dist = f64::INFINITY;
        for (candidate, &seen) in visited.iter().enumerate() {
            if seen {
                continue;
            }
            let d = scenario.dist(current, candidate);
            if d < nearest_dist || nearest.is_none() {
                nearest = Some(candidate);
                nearest_dist = d;
            }
        }
        // loop guard: route.len() < n leaves at least one unvisited node
        let Some(next) = nearest else { break };
        visited[next] = true;
        route.push(next);
        current = next;
    }

    route
}

/// A uniformly random visiting order.
pub fn random_walk<R: Rng>(scenario: &Scenario, rng: &mut R) -> Vec<usize> {
    permutation(scenario.len(), rng)
}
