//! Tour representation and in-place mutation.
//!
//! A [`Tour`] stores, for every position of the cycle, both the node's
//! stable id in the [`Scenario`] and its coordinates. Finders read
//! coordinates without an indirection; results are reported as ids
//! without searching coordinates back up.
//!
//! A tour is exclusively owned by the driver running on it. All mutation
//! goes through [`mutator`] and takes `&mut Tour`.

pub mod mutator;

use crate::error::{Result, TspError};
use crate::geometry::{Point, Scenario};

pub use mutator::{apply_flip, apply_move, apply_relocation, apply_swap};

/// One position of a tour: the node's id and its coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop {
    pub id: usize,
    pub point: Point,
}

/// A closed cycle over all nodes of a scenario. Position `len() - 1`
/// connects back to position `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    stops: Vec<Stop>,
}

impl Tour {
    /// Builds a tour visiting `order`, which must be a permutation of
    /// `0..scenario.len()`.
    pub fn from_order(scenario: &Scenario, order: &[usize]) -> Result<Self> {
        let n = scenario.len();
        if order.len() != n {
            return Err(TspError::invalid_tour(format!(
                "order has {} entries, scenario has {n} nodes",
                order.len()
            )));
        }
        let mut seen = vec![false; n];
        for &id in order {
            if id >= n {
                return Err(TspError::invalid_tour(format!("node id {id} out of range")));
            }
            if seen[id] {
                return Err(TspError::invalid_tour(format!("node id {id} visited twice")));
            }
            seen[id] = true;
        }
        Ok(Self::from_order_unchecked(scenario, order))
    }

    /// Visits the nodes in scenario order.
    pub fn identity(scenario: &Scenario) -> Self {
        let order: Vec<usize> = (0..scenario.len()).collect();
        Self::from_order_unchecked(scenario, &order)
    }

    /// Skips the permutation check; callers guarantee `order` is one.
    pub(crate) fn from_order_unchecked(scenario: &Scenario, order: &[usize]) -> Self {
        let stops = order
            .iter()
            .map(|&id| Stop {
                id,
                point: scenario.point(id),
            })
            .collect();
        Self { stops }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Coordinates at `pos`, taken modulo the tour length.
    #[inline]
    pub fn point(&self, pos: usize) -> Point {
        self.stops[pos % self.stops.len()].point
    }

    /// Node id at `pos`, taken modulo the tour length.
    #[inline]
    pub fn id(&self, pos: usize) -> usize {
        self.stops[pos % self.stops.len()].id
    }

    /// Length of the edge between positions `a` and `b` (both modulo `len`).
    #[inline]
    pub fn edge(&self, a: usize, b: usize) -> f64 {
        self.point(a).dist(&self.point(b))
    }

    /// The visiting order as scenario node ids.
    pub fn ids(&self) -> Vec<usize> {
        self.stops.iter().map(|s| s.id).collect()
    }

    /// The visiting order as coordinates.
    pub fn points(&self) -> Vec<Point> {
        self.stops.iter().map(|s| s.point).collect()
    }

    /// Total closed-cycle length.
    pub fn length(&self) -> f64 {
        let n = self.len();
        if n < 2 {
            return 0.0;
        }
        (0..n).map(|k| self.edge(k, k + 1)).sum()
    }

    /// Whether the tour visits every node of a scenario of size `n` once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for stop in &self.stops {
            if stop.id >= n || seen[stop.id] {
                return false;
            }
            seen[stop.id] = true;
        }
        true
    }

    /// Whether this tour is a permutation of `scenario`'s nodes carrying
    /// that scenario's coordinates.
    pub fn belongs_to(&self, scenario: &Scenario) -> bool {
        self.is_permutation_of(scenario.len())
            && self
                .stops
                .iter()
                .all(|stop| stop.point == scenario.point(stop.id))
    }

    pub(crate) fn stops_mut(&mut self) -> &mut [Stop] {
        &mut self.stops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Scenario {
        Scenario::from_coords(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]])
    }

    #[test]
    fn test_from_order_valid() {
        let scenario = square();
        let tour = Tour::from_order(&scenario, &[2, 0, 3, 1]).unwrap();
        assert_eq!(tour.ids(), vec![2, 0, 3, 1]);
        assert_eq!(tour.point(1), scenario.point(0));
        assert!(tour.is_permutation_of(4));
    }

    #[test]
    fn test_belongs_to_checks_coordinates() {
        let scenario = square();
        let tour = Tour::from_order(&scenario, &[3, 1, 0, 2]).unwrap();
        assert!(tour.belongs_to(&scenario));
        assert!(!tour.belongs_to(&scenario.scaled(2.0)));

        let mut points = scenario.points().to_vec();
        points.push(Point::new(5.0, 5.0));
        let larger = Scenario::new(points);
        assert!(!tour.belongs_to(&larger));
    }

    #[test]
    fn test_from_order_rejects_duplicates() {
        let scenario = square();
        assert!(matches!(
            Tour::from_order(&scenario, &[0, 1, 1, 3]),
            Err(TspError::InvalidTour(_))
        ));
    }

    #[test]
    fn test_from_order_rejects_wrong_length() {
        let scenario = square();
        assert!(Tour::from_order(&scenario, &[0, 1, 2]).is_err());
        assert!(Tour::from_order(&scenario, &[0, 1, 2, 7]).is_err());
    }

    #[test]
    fn test_length_and_wrapping_access() {
        let scenario = square();
        let tour = Tour::identity(&scenario);
        assert!((tour.length() - 4.0).abs() < 1e-12);
        assert_eq!(tour.id(5), 1);
        assert!((tour.edge(3, 4) - 1.0).abs() < 1e-12);

        let crossed = Tour::from_order(&scenario, &[0, 2, 1, 3]).unwrap();
        assert!((crossed.length() - (2.0 + 2.0 * 2f64.sqrt())).abs() < 1e-12);
    }

    #[test]
    fn test_ids_survive_duplicate_points() {
        let scenario = Scenario::from_coords(&[[0.0, 0.0], [0.0, 0.0], [3.0, 4.0]]);
        let tour = Tour::from_order(&scenario, &[1, 2, 0]).unwrap();
        assert_eq!(tour.ids(), vec![1, 2, 0]);
    }
}
