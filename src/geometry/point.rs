//! Planar points.

/// A 2D coordinate. Immutable once part of a [`Scenario`](super::Scenario).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn dist(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns this point with both coordinates multiplied by `k`.
    pub fn scaled(&self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dist_pythagorean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, -3.0);
        assert!((a.dist(&b) - 5.0).abs() < 1e-12);
        assert!((b.dist(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_dist_to_self_is_zero() {
        let p = Point::from([3.5, 7.25]);
        assert_eq!(p.dist(&p), 0.0);
    }

    #[test]
    fn test_scaled() {
        let p = Point::new(1.5, -2.0).scaled(4.0);
        assert_eq!(p, Point::new(6.0, -8.0));
    }
}
