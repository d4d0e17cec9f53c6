//! Error type shared by all drivers.

use thiserror::Error as ThisError;

/// Errors reported by scenario construction, configuration validation and
/// driver entry points.
///
/// "No move found" is not an error: finders report it as `None`.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum TspError {
    /// The scenario is too small to form a meaningful tour.
    #[error("scenario has {found} nodes, at least {required} required")]
    TooFewNodes { found: usize, required: usize },

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A node order is not a permutation of the scenario's nodes.
    #[error("invalid tour: {0}")]
    InvalidTour(String),

    /// A coordinate does not belong to the scenario.
    #[error("point ({x}, {y}) is not part of the scenario")]
    UnknownPoint { x: f64, y: f64 },

    /// The distance normalizer is zero, negative or not finite, which
    /// happens when all points coincide.
    #[error("distance normalizer must be positive and finite, got {0}")]
    DegenerateNormalizer(f64),
}

pub type Result<T> = std::result::Result<T, TspError>;

impl TspError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn invalid_tour(message: impl Into<String>) -> Self {
        Self::InvalidTour(message.into())
    }
}
