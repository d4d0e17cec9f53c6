//! Ant Colony Optimization (ACO).
//!
//! A population of ants builds tours guided by pheromone trails and
//! inverse distance. Short tours deposit more pheromone; evaporation
//! lets unused edges fade. The colony stops once every node has two
//! strongly marked edges.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"

mod config;
mod pheromones;
mod runner;

pub use config::AcoConfig;
pub use pheromones::{did_converge, produced_pheromones, Pheromones};
pub use runner::{produce_ant_route, AcoResult, AcoRunner};
