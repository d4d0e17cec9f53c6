//! Points, scenarios and distance helpers.

mod point;
mod scenario;

pub use point::Point;
pub use scenario::{journey_length, Scenario, MIN_NODES};
