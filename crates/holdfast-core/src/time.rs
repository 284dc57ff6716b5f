//! Tick counting and fixed-step timing
//!
//! The buffer advances in discrete ticks at a fixed rate, independent of the
//! host's frame rate. `FixedTicker` converts variable frame deltas into a
//! whole number of fixed steps and carries the remainder forward.

use serde::{Deserialize, Serialize};

/// A discrete tick identifier (logical time unit)
pub type Tick = u64;

/// Most fixed steps a single `advance` call will report
///
/// Time beyond this (a host stall, a bad delta) is dropped.
pub const MAX_STEPS_PER_ADVANCE: u32 = 240;

/// Fixed-step accumulator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedTicker {
    /// Seconds per step
    interval: f32,
    /// Seconds accumulated but not yet consumed by a step
    accumulated: f32,
}

impl FixedTicker {
    /// Create a ticker running at `rate` steps per second
    ///
    /// # Panics
    ///
    /// Panics if `rate` is not a positive finite number.
    pub fn from_rate(rate: f32) -> Self {
        assert!(
            rate.is_finite() && rate > 0.0,
            "Update rate must be positive, got {rate}"
        );
        Self {
            interval: 1.0 / rate,
            accumulated: 0.0,
        }
    }

    /// Seconds per step
    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Seconds accumulated towards the next step
    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    /// Add elapsed time and return how many fixed steps are now due
    ///
    /// Negative and non-finite deltas are ignored. At most
    /// [`MAX_STEPS_PER_ADVANCE`] steps are returned; any excess is discarded.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if dt.is_finite() && dt > 0.0 {
            self.accumulated += dt;
        }

        let due = (self.accumulated / self.interval).floor();
        if due < 1.0 {
            return 0;
        }
        self.accumulated = self.accumulated.rem_euclid(self.interval);

        if due > MAX_STEPS_PER_ADVANCE as f32 {
            tracing::warn!(due, max = MAX_STEPS_PER_ADVANCE, "dropping excess fixed steps");
            return MAX_STEPS_PER_ADVANCE;
        }
        due as u32
    }

    /// Drop any accumulated time
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

impl Default for FixedTicker {
    fn default() -> Self {
        Self::from_rate(60.0)
    }
}
