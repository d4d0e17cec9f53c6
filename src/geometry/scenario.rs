//! Scenarios and the length/distance helpers built on them.

use super::point::Point;
use crate::error::{Result, TspError};
use rand::Rng;

/// Smallest scenario any driver accepts.
pub const MIN_NODES: usize = 3;

/// An ordered, read-only set of points. A node's id is its index here.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    points: Vec<Point>,
}

impl Scenario {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Builds a scenario from `[x, y]` pairs.
    pub fn from_coords(coords: &[[f64; 2]]) -> Self {
        Self::new(coords.iter().copied().map(Point::from).collect())
    }

    /// `n` uniformly random points in `[0, map_size)²`.
    pub fn generate<R: Rng>(n: usize, map_size: f64, rng: &mut R) -> Self {
        let points = (0..n)
            .map(|_| {
                Point::new(
                    rng.random::<f64>() * map_size,
                    rng.random::<f64>() * map_size,
                )
            })
            .collect();
        Self::new(points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn point(&self, id: usize) -> Point {
        self.points[id]
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Distance between nodes `a` and `b`.
    #[inline]
    pub fn dist(&self, a: usize, b: usize) -> f64 {
        self.points[a].dist(&self.points[b])
    }

    /// Returns a copy with every coordinate multiplied by `k`.
    pub fn scaled(&self, k: f64) -> Scenario {
        Scenario::new(self.points.iter().map(|p| p.scaled(k)).collect())
    }

    /// Rejects scenarios with fewer than `required` nodes.
    pub fn require_nodes(&self, required: usize) -> Result<()> {
        if self.len() < required {
            return Err(TspError::TooFewNodes {
                found: self.len(),
                required,
            });
        }
        Ok(())
    }

    /// Symmetric `n × n` matrix of pairwise distances with a zero diagonal.
    pub fn distance_matrix(&self) -> Vec<Vec<f64>> {
        let n = self.len();
        let mut matrix = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = self.dist(i, j);
                matrix[i][j] = d;
                matrix[j][i] = d;
            }
        }
        matrix
    }

    /// Closed-cycle length of the tour visiting nodes in `order`.
    pub fn tour_length(&self, order: &[usize]) -> f64 {
        let n = order.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|k| self.dist(order[k], order[(k + 1) % n]))
            .sum()
    }

    /// Maps coordinates back to node ids by exact equality.
    ///
    /// Duplicated points resolve to the lowest matching id, so this only
    /// round-trips for scenarios whose points are unique. Prefer
    /// [`Tour::ids`](crate::tour::Tour::ids), which carries identity directly.
    pub fn indices_of(&self, route: &[Point]) -> Result<Vec<usize>> {
        route
            .iter()
            .map(|p| {
                self.points
                    .iter()
                    .position(|q| q == p)
                    .ok_or(TspError::UnknownPoint { x: p.x, y: p.y })
            })
            .collect()
    }

    /// The points visited in `order`.
    pub fn route_points(&self, order: &[usize]) -> Vec<Point> {
        order.iter().map(|&id| self.points[id]).collect()
    }
}

/// Closed-cycle length over a sequence of points (the last point connects
/// back to the first).
pub fn journey_length(route: &[Point]) -> f64 {
    let n = route.len();
    if n < 2 {
        return 0.0;
    }
    (0..n).map(|k| route[k].dist(&route[(k + 1) % n])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{create_rng, permutation};

    #[test]
    fn test_journey_length_triangle() {
        let scenario = Scenario::from_coords(&[[0.0, 0.0], [4.0, -3.0], [8.0, 0.0]]);
        assert!((journey_length(scenario.points()) - 18.0).abs() < 1e-12);
        assert!((scenario.tour_length(&[0, 1, 2]) - 18.0).abs() < 1e-12);
    }

    #[test]
    fn test_generate_within_bounds() {
        let mut rng = create_rng(42);
        let scenario = Scenario::generate(200, 50.0, &mut rng);
        assert_eq!(scenario.len(), 200);
        for p in scenario.points() {
            assert!((0.0..50.0).contains(&p.x));
            assert!((0.0..50.0).contains(&p.y));
        }
    }

    #[test]
    fn test_distance_matrix_symmetric_zero_diagonal() {
        let mut rng = create_rng(5);
        let scenario = Scenario::generate(12, 100.0, &mut rng);
        let m = scenario.distance_matrix();
        for i in 0..12 {
            assert_eq!(m[i][i], 0.0);
            for j in 0..12 {
                assert_eq!(m[i][j], m[j][i]);
                assert!((m[i][j] - scenario.dist(i, j)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_indices_of_round_trip() {
        let mut rng = create_rng(11);
        let scenario = Scenario::generate(10, 100.0, &mut rng);
        let order = permutation(10, &mut rng);
        let route = scenario.route_points(&order);
        assert_eq!(scenario.indices_of(&route).unwrap(), order);
    }

    #[test]
    fn test_indices_of_unknown_point() {
        let scenario = Scenario::from_coords(&[[0.0, 0.0], [1.0, 1.0]]);
        let err = scenario.indices_of(&[Point::new(2.0, 2.0)]).unwrap_err();
        assert_eq!(err, TspError::UnknownPoint { x: 2.0, y: 2.0 });
    }

    #[test]
    fn test_require_nodes() {
        let scenario = Scenario::from_coords(&[[0.0, 0.0], [1.0, 1.0]]);
        assert_eq!(
            scenario.require_nodes(MIN_NODES),
            Err(TspError::TooFewNodes {
                found: 2,
                required: 3
            })
        );
        assert!(scenario.require_nodes(2).is_ok());
    }

    #[test]
    fn test_scaled_tour_length_scales() {
        let mut rng = create_rng(8);
        let scenario = Scenario::generate(15, 10.0, &mut rng);
        let order: Vec<usize> = (0..15).collect();
        let base = scenario.tour_length(&order);
        let scaled = scenario.scaled(3.0).tour_length(&order);
        assert!((scaled - 3.0 * base).abs() < 1e-9);
    }
}
