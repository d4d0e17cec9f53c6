//! Annealing configuration and cooling schedules.

use crate::error::{Result, TspError};
use crate::moves::MoveKind;

/// Temperature as a function of the elapsed share `f` of the time budget.
///
/// Both schedules start at `1 / cooling_scalar` and reach zero when the
/// budget is spent. Higher scalars start colder and behave more greedily.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// `T = (1 - f) / cooling_scalar`.
    Linear,
    /// `T = (1 - f)² / cooling_scalar`. Spends more of the budget cold.
    Quadratic,
}

impl CoolingSchedule {
    /// Temperature after `fraction` of the budget has elapsed.
    pub fn temperature(&self, fraction: f64, cooling_scalar: f64) -> f64 {
        let remaining = (1.0 - fraction).clamp(0.0, 1.0);
        match self {
            CoolingSchedule::Linear => remaining / cooling_scalar,
            CoolingSchedule::Quadratic => remaining * remaining / cooling_scalar,
        }
    }
}

fn validate_common(time_limit_ms: u64, cooling_scalar: f64, normalizer_samples: usize) -> Result<()> {
    if time_limit_ms == 0 {
        return Err(TspError::invalid_config("time_limit_ms must be positive"));
    }
    if !cooling_scalar.is_finite() || cooling_scalar < 1.0 {
        return Err(TspError::invalid_config(format!(
            "cooling_scalar must be a finite value >= 1, got {cooling_scalar}"
        )));
    }
    if normalizer_samples == 0 {
        return Err(TspError::invalid_config("normalizer_samples must be at least 1"));
    }
    Ok(())
}

/// Configuration for threshold-driven annealing over flips and relocations.
///
/// # Examples
///
/// ```
/// use u_tsp::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_time_limit_ms(2_000)
///     .with_cooling(CoolingSchedule::Quadratic)
///     .with_cooling_scalar(4.0)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Wall-clock budget in milliseconds. The run always uses all of it.
    pub time_limit_ms: u64,

    /// Divides the schedule's temperature. Must be at least 1.
    pub cooling_scalar: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Move classes queried each iteration, in order. Every class may
    /// apply one move per iteration.
    pub moves: Vec<MoveKind>,

    /// Random tours averaged to compute the distance normalizer.
    pub normalizer_samples: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 40_000,
            cooling_scalar: 2.0,
            cooling: CoolingSchedule::Quadratic,
            moves: vec![MoveKind::SegmentFlip, MoveKind::NodeRelocation],
            normalizer_samples: 10,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    pub fn with_cooling_scalar(mut self, scalar: f64) -> Self {
        self.cooling_scalar = scalar;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_moves(mut self, moves: Vec<MoveKind>) -> Self {
        self.moves = moves;
        self
    }

    pub fn with_normalizer_samples(mut self, samples: usize) -> Self {
        self.normalizer_samples = samples;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        validate_common(self.time_limit_ms, self.cooling_scalar, self.normalizer_samples)?;
        if self.moves.is_empty() {
            return Err(TspError::invalid_config("at least one move kind must be enabled"));
        }
        Ok(())
    }
}

/// Configuration for the adjacent-swap annealer.
///
/// # Examples
///
/// ```
/// use u_tsp::sa::SwapSaConfig;
///
/// let config = SwapSaConfig::default().with_time_limit_ms(500).with_seed(1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapSaConfig {
    /// Wall-clock budget in milliseconds.
    pub time_limit_ms: u64,

    /// Divides the schedule's temperature. Must be at least 1.
    pub cooling_scalar: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Random tours averaged to compute the distance normalizer.
    pub normalizer_samples: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SwapSaConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 20_000,
            cooling_scalar: 2.0,
            cooling: CoolingSchedule::Linear,
            normalizer_samples: 10,
            seed: None,
        }
    }
}

impl SwapSaConfig {
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    pub fn with_cooling_scalar(mut self, scalar: f64) -> Self {
        self.cooling_scalar = scalar;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_normalizer_samples(mut self, samples: usize) -> Self {
        self.normalizer_samples = samples;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        validate_common(self.time_limit_ms, self.cooling_scalar, self.normalizer_samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert_eq!(config.time_limit_ms, 40_000);
        assert!((config.cooling_scalar - 2.0).abs() < 1e-12);
        assert_eq!(config.cooling, CoolingSchedule::Quadratic);
        assert!(config.validate().is_ok());

        let swap = SwapSaConfig::default();
        assert_eq!(swap.time_limit_ms, 20_000);
        assert_eq!(swap.cooling, CoolingSchedule::Linear);
        assert!(swap.validate().is_ok());
    }

    #[test]
    fn test_temperature_schedules() {
        let q = CoolingSchedule::Quadratic;
        let l = CoolingSchedule::Linear;
        assert!((q.temperature(0.0, 2.0) - 0.5).abs() < 1e-12);
        assert!((q.temperature(0.5, 2.0) - 0.125).abs() < 1e-12);
        assert!((l.temperature(0.5, 2.0) - 0.25).abs() < 1e-12);
        assert_eq!(q.temperature(1.0, 2.0), 0.0);
        assert_eq!(l.temperature(1.5, 2.0), 0.0);
    }

    #[test]
    fn test_temperature_non_increasing() {
        for schedule in [CoolingSchedule::Linear, CoolingSchedule::Quadratic] {
            let mut prev = f64::INFINITY;
            for k in 0..=100 {
                let t = schedule.temperature(k as f64 / 100.0, 1.0);
                assert!(t <= prev);
                assert!((0.0..=1.0).contains(&t));
                prev = t;
            }
        }
    }

    #[test]
    fn test_validate_bad_scalar() {
        assert!(SaConfig::default().with_cooling_scalar(0.5).validate().is_err());
        assert!(SaConfig::default().with_cooling_scalar(f64::NAN).validate().is_err());
        assert!(SwapSaConfig::default().with_cooling_scalar(-1.0).validate().is_err());
    }

    #[test]
    fn test_validate_zero_budget() {
        assert!(SaConfig::default().with_time_limit_ms(0).validate().is_err());
        assert!(SwapSaConfig::default().with_time_limit_ms(0).validate().is_err());
    }

    #[test]
    fn test_validate_no_samples_or_moves() {
        assert!(SaConfig::default().with_normalizer_samples(0).validate().is_err());
        assert!(SaConfig::default().with_moves(vec![]).validate().is_err());
    }
}
