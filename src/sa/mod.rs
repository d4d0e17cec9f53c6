//! Simulated Annealing for the Euclidean TSP.
//!
//! Two acceptance models share the cooling schedules and the distance
//! normalizer:
//!
//! - [`SaRunner`]: draws one acceptance threshold per iteration and asks
//!   the flip and relocation finders for any move under it
//! - [`SwapAnnealer`]: adjacent swaps only, with a per-position energy
//!   table that is refreshed locally after each swap
//!
//! Temperatures follow the wall clock: `T` falls from `1 / cooling_scalar`
//! to zero as the time budget runs out.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod energy;
mod normalizer;
mod runner;
mod swap;

pub use config::{CoolingSchedule, SaConfig, SwapSaConfig};
pub use energy::{acceptance_probability, affected_positions, swap_energy, EnergyTable};
pub use normalizer::{distance_normalizer, random_threshold};
pub use runner::{SaResult, SaRunner};
pub use swap::{SwapAnnealer, SwapSaResult};
