//! Independent restarts of a single driver.
//!
//! Each run gets its own seed, tour and tables; runs share nothing but
//! the read-only scenario. With the `parallel` feature and
//! [`MultiStartConfig::parallel`] set, runs execute on the rayon pool.

use crate::aco::{AcoConfig, AcoRunner};
use crate::error::{Result, TspError};
use crate::geometry::Scenario;
use crate::ls::{LocalSearchConfig, LocalSearchRunner};
use crate::random::rng_from;
use crate::sa::{SaConfig, SaRunner, SwapAnnealer, SwapSaConfig};
use rand::Rng;
use std::time::{Duration, Instant};

/// Driver repeated by a multi-start run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    LocalSearch(LocalSearchConfig),
    Annealing(SaConfig),
    SwapAnnealing(SwapSaConfig),
    AntColony(AcoConfig),
}

impl Strategy {
    fn validate(&self) -> Result<()> {
        match self {
            Strategy::LocalSearch(config) => config.validate(),
            Strategy::Annealing(config) => config.validate(),
            Strategy::SwapAnnealing(config) => config.validate(),
            Strategy::AntColony(config) => config.validate(),
        }
    }

    /// Runs the driver once with `seed`, returning `(tour, length)`.
    fn run_once(&self, scenario: &Scenario, seed: u64) -> Result<(Vec<usize>, f64)> {
        match self {
            Strategy::LocalSearch(config) => {
                let result = LocalSearchRunner::run(scenario, &config.clone().with_seed(seed))?;
                Ok((result.tour, result.length))
            }
            Strategy::Annealing(config) => {
                let result = SaRunner::run(scenario, &config.clone().with_seed(seed))?;
                Ok((result.tour, result.length))
            }
            Strategy::SwapAnnealing(config) => {
                let result = SwapAnnealer::run(scenario, &config.clone().with_seed(seed))?;
                Ok((result.tour, result.length))
            }
            Strategy::AntColony(config) => {
                let result = AcoRunner::run(scenario, &config.clone().with_seed(seed))?;
                Ok((result.tour, result.length))
            }
        }
    }
}

/// Configuration for [`MultiStart`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiStartConfig {
    /// Driver to repeat.
    pub strategy: Strategy,

    /// Number of independent runs.
    pub runs: usize,

    /// Run in parallel when the `parallel` feature is enabled.
    pub parallel: bool,

    /// Base seed from which per-run seeds are drawn.
    pub seed: Option<u64>,
}

impl MultiStartConfig {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            runs: 4,
            parallel: true,
            seed: None,
        }
    }

    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.runs == 0 {
            return Err(TspError::invalid_config("runs must be at least 1"));
        }
        self.strategy.validate()
    }
}

/// Result of a multi-start run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiStartResult {
    /// Shortest tour over all runs.
    pub tour: Vec<usize>,

    /// Length of `tour`.
    pub length: f64,

    /// Index of the run that produced `tour`.
    pub best_run: usize,

    /// Seed used by each run.
    pub seeds: Vec<u64>,

    /// Final length of each run, in run order.
    pub run_lengths: Vec<f64>,

    /// Wall-clock time spent over all runs.
    pub elapsed: Duration,
}

/// Executes independent restarts.
pub struct MultiStart;

impl MultiStart {
    pub fn run(scenario: &Scenario, config: &MultiStartConfig) -> Result<MultiStartResult> {
        config.validate()?;

        let start = Instant::now();
        let mut rng = rng_from(config.seed);
        let seeds: Vec<u64> = (0..config.runs).map(|_| rng.random()).collect();

        log::debug!(
            "multi-start: runs={} parallel={}",
            config.runs,
            config.parallel
        );

        let outcomes = run_all(scenario, &config.strategy, &seeds, config.parallel)?;

        let mut best_run = 0usize;
        for (run, (_, length)) in outcomes.iter().enumerate() {
            if *length < outcomes[best_run].1 {
                best_run = run;
            }
        }
        let run_lengths: Vec<f64> = outcomes.iter().map(|(_, length)| *length).collect();
        let (tour, length) = outcomes
            .into_iter()
            .nth(best_run)
            .ok_or_else(|| TspError::invalid_config("runs must be at least 1"))?;

        let elapsed = start.elapsed();
        log::info!(
            "multi-start done: best_run={best_run} length={length:.3} elapsed_ms={}",
            elapsed.as_millis()
        );

        Ok(MultiStartResult {
            tour,
            length,
            best_run,
            seeds,
            run_lengths,
            elapsed,
        })
    }
}

#[cfg(feature = "parallel")]
fn run_all(
    scenario: &Scenario,
    strategy: &Strategy,
    seeds: &[u64],
    parallel: bool,
) -> Result<Vec<(Vec<usize>, f64)>> {
    use rayon::prelude::*;

    if parallel {
        seeds
            .par_iter()
            .map(|&seed| strategy.run_once(scenario, seed))
            .collect()
    } else {
        seeds
            .iter()
            .map(|&seed| strategy.run_once(scenario, seed))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn run_all(
    scenario: &Scenario,
    strategy: &Strategy,
    seeds: &[u64],
    _parallel: bool,
) -> Result<Vec<(Vec<usize>, f64)>> {
    seeds
        .iter()
        .map(|&seed| strategy.run_once(scenario, seed))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construct::InitialTour;
    use crate::random::create_rng;

    fn scenario(n: usize, seed: u64) -> Scenario {
        let mut rng = create_rng(seed);
        Scenario::generate(n, 100.0, &mut rng)
    }

    #[test]
    fn test_best_of_runs() {
        let scenario = scenario(30, 3);
        let strategy =
            Strategy::LocalSearch(LocalSearchConfig::default().with_initial(InitialTour::Random));
        let config = MultiStartConfig::new(strategy).with_runs(5).with_seed(3);

        let result = MultiStart::run(&scenario, &config).unwrap();

        assert_eq!(result.run_lengths.len(), 5);
        assert_eq!(result.seeds.len(), 5);
        let min = result
            .run_lengths
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        assert_eq!(result.length, min);
        assert_eq!(result.run_lengths[result.best_run], result.length);
        assert!((scenario.tour_length(&result.tour) - result.length).abs() < 1e-9);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let scenario = scenario(25, 9);
        let strategy =
            Strategy::LocalSearch(LocalSearchConfig::default().with_initial(InitialTour::Random));
        let config = MultiStartConfig::new(strategy)
            .with_runs(3)
            .with_parallel(false)
            .with_seed(9);

        let a = MultiStart::run(&scenario, &config).unwrap();
        let b = MultiStart::run(&scenario, &config).unwrap();

        assert_eq!(a.seeds, b.seeds);
        assert_eq!(a.tour, b.tour);
        assert_eq!(a.run_lengths, b.run_lengths);
    }

    #[test]
    fn test_annealing_strategy() {
        let scenario = scenario(20, 4);
        let strategy = Strategy::Annealing(SaConfig::default().with_time_limit_ms(30));
        let config = MultiStartConfig::new(strategy).with_runs(2).with_seed(4);

        let result = MultiStart::run(&scenario, &config).unwrap();
        let mut sorted = result.tour.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_runs_rejected() {
        let config =
            MultiStartConfig::new(Strategy::LocalSearch(LocalSearchConfig::default())).with_runs(0);
        assert!(matches!(
            MultiStart::run(&scenario(10, 1), &config),
            Err(TspError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_inner_config_validated() {
        let strategy = Strategy::AntColony(AcoConfig::default().with_ants(0));
        let config = MultiStartConfig::new(strategy);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_too_few_nodes_propagates() {
        let scenario = Scenario::from_coords(&[[0.0, 0.0], [1.0, 1.0]]);
        let config = MultiStartConfig::new(Strategy::LocalSearch(LocalSearchConfig::default()))
            .with_runs(2);
        assert!(matches!(
            MultiStart::run(&scenario, &config),
            Err(TspError::TooFewNodes { .. })
        ));
    }
}
