//! Local search configuration.

use crate::construct::InitialTour;
use crate::error::{Result, TspError};
use crate::moves::MoveKind;

/// Configuration for the local search driver.
///
/// # Examples
///
/// ```
/// use u_tsp::construct::InitialTour;
/// use u_tsp::ls::LocalSearchConfig;
/// use u_tsp::moves::MoveKind;
///
/// let config = LocalSearchConfig::default()
///     .with_initial(InitialTour::Random)
///     .with_moves(vec![MoveKind::NodeRelocation, MoveKind::SegmentFlip])
///     .with_time_limit_ms(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchConfig {
    /// How the starting tour is built by [`LocalSearchRunner::run`](super::LocalSearchRunner::run).
    pub initial: InitialTour,

    /// Enabled move classes in priority order. After every applied move
    /// the search restarts from the first entry.
    pub moves: Vec<MoveKind>,

    /// Wall-clock budget in milliseconds. `None` runs to convergence.
    pub time_limit_ms: Option<u64>,

    /// Random seed for the scan orders.
    pub seed: Option<u64>,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            initial: InitialTour::Greedy,
            moves: vec![MoveKind::SegmentFlip, MoveKind::NodeRelocation],
            time_limit_ms: None,
            seed: None,
        }
    }
}

impl LocalSearchConfig {
    pub fn with_initial(mut self, initial: InitialTour) -> Self {
        self.initial = initial;
        self
    }

    /// Sets the enabled move classes and their priority.
    pub fn with_moves(mut self, moves: Vec<MoveKind>) -> Self {
        self.moves = moves;
        self
    }

    /// Enables or disables the 2-opt finder, keeping the others' order.
    pub fn with_segment_flip(self, enabled: bool) -> Self {
        self.toggle(MoveKind::SegmentFlip, enabled)
    }

    /// Enables or disables the relocation finder, keeping the others' order.
    pub fn with_relocation(self, enabled: bool) -> Self {
        self.toggle(MoveKind::NodeRelocation, enabled)
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn toggle(mut self, kind: MoveKind, enabled: bool) -> Self {
        self.moves.retain(|&k| k != kind);
        if enabled {
            self.moves.push(kind);
        }
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.moves.is_empty() {
            return Err(TspError::invalid_config("at least one move kind must be enabled"));
        }
        for (k, kind) in self.moves.iter().enumerate() {
            if self.moves[..k].contains(kind) {
                return Err(TspError::invalid_config(format!("{kind:?} listed twice")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LocalSearchConfig::default();
        assert_eq!(config.initial, InitialTour::Greedy);
        assert_eq!(
            config.moves,
            vec![MoveKind::SegmentFlip, MoveKind::NodeRelocation]
        );
        assert!(config.time_limit_ms.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toggle_moves() {
        let config = LocalSearchConfig::default().with_segment_flip(false);
        assert_eq!(config.moves, vec![MoveKind::NodeRelocation]);

        let config = config.with_segment_flip(true);
        assert_eq!(
            config.moves,
            vec![MoveKind::NodeRelocation, MoveKind::SegmentFlip]
        );
    }

    #[test]
    fn test_validate_no_moves() {
        let config = LocalSearchConfig::default()
            .with_segment_flip(false)
            .with_relocation(false);
        assert!(matches!(config.validate(), Err(TspError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_duplicate_moves() {
        let config = LocalSearchConfig::default()
            .with_moves(vec![MoveKind::SegmentFlip, MoveKind::SegmentFlip]);
        assert!(config.validate().is_err());
    }
}
