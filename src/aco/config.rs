//! Ant colony configuration.

use crate::error::{Result, TspError};

/// Configuration for ant colony optimization.
///
/// # Examples
///
/// ```
/// use u_tsp::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_ants(30)
///     .with_weights(1.0, 3.0)
///     .with_evaporation(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Ants released per iteration.
    pub ants: usize,

    /// Pheromone exponent in the transition rule.
    pub alpha: f64,

    /// Inverse-distance exponent in the transition rule.
    pub beta: f64,

    /// Share of pheromone lost per iteration, in `[0, 1)`.
    pub evaporation: f64,

    /// The colony has converged when every node's second-strongest edge
    /// holds at least this much (normalized) pheromone.
    pub convergence_threshold: f64,

    /// Maximum number of iterations.
    pub max_iterations: usize,

    /// Wall-clock budget in milliseconds. `None` for no limit.
    pub time_limit_ms: Option<u64>,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ants: 20,
            alpha: 1.0,
            beta: 2.0,
            evaporation: 0.1,
            convergence_threshold: 0.5,
            max_iterations: 500,
            time_limit_ms: None,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_ants(mut self, ants: usize) -> Self {
        self.ants = ants;
        self
    }

    /// Sets the pheromone (`alpha`) and distance (`beta`) exponents.
    pub fn with_weights(mut self, alpha: f64, beta: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    pub fn with_evaporation(mut self, rate: f64) -> Self {
        self.evaporation = rate;
        self
    }

    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.ants == 0 {
            return Err(TspError::invalid_config("ants must be at least 1"));
        }
        if self.max_iterations == 0 {
            return Err(TspError::invalid_config("max_iterations must be at least 1"));
        }
        if !(0.0..1.0).contains(&self.evaporation) {
            return Err(TspError::invalid_config(format!(
                "evaporation must be in [0, 1), got {}",
                self.evaporation
            )));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 || !self.beta.is_finite() || self.beta < 0.0 {
            return Err(TspError::invalid_config(format!(
                "alpha and beta must be non-negative, got {} and {}",
                self.alpha, self.beta
            )));
        }
        if !(0.0..=1.0).contains(&self.convergence_threshold) {
            return Err(TspError::invalid_config(format!(
                "convergence_threshold must be in [0, 1], got {}",
                self.convergence_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AcoConfig::default();
        assert_eq!(config.ants, 20);
        assert!((config.convergence_threshold - 0.5).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_values() {
        assert!(AcoConfig::default().with_ants(0).validate().is_err());
        assert!(AcoConfig::default().with_evaporation(1.0).validate().is_err());
        assert!(AcoConfig::default().with_weights(-1.0, 2.0).validate().is_err());
        assert!(AcoConfig::default()
            .with_convergence_threshold(1.5)
            .validate()
            .is_err());
        assert!(AcoConfig::default().with_max_iterations(0).validate().is_err());
    }
}
