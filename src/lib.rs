//! Euclidean traveling-salesman heuristics.
//!
//! Provides tour construction and improvement for points in the plane:
//!
//! - **Construction**: nearest-neighbour greedy tour and uniformly random
//!   tours.
//! - **Move finders**: 2-opt segment flip and single-node relocation
//!   (Or-opt), both with randomized scan order and a pluggable
//!   `delta < theta` acceptance predicate.
//! - **Local Search (LS)**: first-improvement descent over the enabled
//!   finders until no improving move remains or time runs out.
//! - **Simulated Annealing (SA)**: a threshold-driven annealer reusing
//!   the finders, plus a basic adjacent-swap annealer with an
//!   incrementally maintained energy table.
//! - **Ant Colony Optimization (ACO)**: pheromone-guided tour
//!   construction with evaporation and a convergence test.
//! - **Multi-start**: independent restarts of any driver, optionally on
//!   the rayon pool.
//!
//! # Example
//!
//! ```
//! use u_tsp::geometry::Scenario;
//! use u_tsp::ls::{LocalSearchConfig, LocalSearchRunner};
//! use u_tsp::random::create_rng;
//!
//! let mut rng = create_rng(7);
//! let scenario = Scenario::generate(50, 100.0, &mut rng);
//! let config = LocalSearchConfig::default().with_seed(7);
//!
//! let result = LocalSearchRunner::run(&scenario, &config).unwrap();
//! assert_eq!(result.tour.len(), 50);
//! ```

pub mod aco;
pub mod construct;
pub mod deadline;
pub mod error;
pub mod geometry;
pub mod ls;
pub mod moves;
pub mod multistart;
pub mod random;
pub mod sa;
pub mod tour;

pub use error::{Result, TspError};
