//! Pheromone bookkeeping.
//!
//! Matrices are `n × n` with only the upper triangle (`a < b`) in use;
//! an undirected edge `{a, b}` lives at `[min][max]`.

/// Pheromone produced by a set of closed ant routes.
///
/// Every edge of a route, including the one closing the cycle, receives
/// `1 / route_length`. Contributions of several ants add up.
pub fn produced_pheromones(routes: &[Vec<usize>], edge_lengths: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = edge_lengths.len();
    let mut produced = vec![vec![0.0; n]; n];

    for route in routes {
        let m = route.len();
        if m < 2 {
            continue;
        }
        let length: f64 = (0..m)
            .map(|k| edge_lengths[route[k]][route[(k + 1) % m]])
            .sum();
        if length <= 0.0 {
            continue;
        }
        let deposit = 1.0 / length;
        for k in 0..m {
            let (a, b) = ordered(route[k], route[(k + 1) % m]);
            produced[a][b] += deposit;
        }
    }

    produced
}

/// Whether every node has at least two incident edges holding
/// `threshold` or more pheromone.
pub fn did_converge(pheromones: &[Vec<f64>], threshold: f64) -> bool {
    let n = pheromones.len();
    (0..n).all(|node| {
        let (mut first, mut second) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for other in (0..n).filter(|&o| o != node) {
            let (a, b) = ordered(node, other);
            let value = pheromones[a][b];
            if value > first {
                second = first;
                first = value;
            } else if value > second {
                second = value;
            }
        }
        second >= threshold
    })
}

#[inline]
fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Upper-triangular pheromone levels.
#[derive(Debug, Clone, PartialEq)]
pub struct Pheromones {
    levels: Vec<Vec<f64>>,
}

impl Pheromones {
    /// Every edge starts at `initial`.
    pub fn new(n: usize, initial: f64) -> Self {
        let mut levels = vec![vec![0.0; n]; n];
        for (a, row) in levels.iter_mut().enumerate() {
            for level in row.iter_mut().skip(a + 1) {
                *level = initial;
            }
        }
        Self { levels }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Level on the undirected edge `{a, b}`.
    #[inline]
    pub fn get(&self, a: usize, b: usize) -> f64 {
        let (a, b) = ordered(a, b);
        self.levels[a][b]
    }

    pub fn levels(&self) -> &[Vec<f64>] {
        &self.levels
    }

    /// Evaporates by `rate`, then adds `produced`.
    pub fn update(&mut self, produced: &[Vec<f64>], rate: f64) {
        for (row, added) in self.levels.iter_mut().zip(produced) {
            for (level, &delta) in row.iter_mut().zip(added) {
                *level = *level * (1.0 - rate) + delta;
            }
        }
    }

    /// Levels divided by the strongest edge's level.
    pub fn relative_levels(&self) -> Vec<Vec<f64>> {
        let max = self.levels.iter().flatten().copied().fold(0.0_f64, f64::max);
        if max <= 0.0 {
            return self.levels.clone();
        }
        self.levels
            .iter()
            .map(|row| row.iter().map(|&level| level / max).collect())
            .collect()
    }

    /// Convergence test on the relative levels.
    pub fn converged(&self, threshold: f64) -> bool {
        did_converge(&self.relative_levels(), threshold)
    }
}
