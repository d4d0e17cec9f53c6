//! Wall-clock budget shared by the drivers.

use std::time::{Duration, Instant};

/// A start instant plus an optional time limit.
///
/// Checking is a non-blocking clock read. Without a limit the deadline
/// never expires and [`Deadline::fraction`] stays at zero.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    limit: Option<Duration>,
}

impl Deadline {
    /// Starts the clock now with an optional limit in milliseconds.
    pub fn start(limit_ms: Option<u64>) -> Self {
        Self {
            start: Instant::now(),
            limit: limit_ms.map(Duration::from_millis),
        }
    }

    /// A deadline that never expires.
    pub fn unlimited() -> Self {
        Self::start(None)
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn limit(&self) -> Option<Duration> {
        self.limit
    }

    /// Whether the limit has been reached.
    #[inline]
    pub fn expired(&self) -> bool {
        match self.limit {
            Some(limit) => self.start.elapsed() >= limit,
            None => false,
        }
    }

    /// Elapsed share of the limit, clamped to `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        match self.limit {
            Some(limit) if !limit.is_zero() => {
                (self.start.elapsed().as_secs_f64() / limit.as_secs_f64()).min(1.0)
            }
            Some(_) => 1.0,
            None => 0.0,
        }
    }
}
