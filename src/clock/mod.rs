//! Simulation clock
//!
//! Hosts drive the simulation with a bare `f64` time value; this module is
//! a small convenience for producing one. `SimClock` accumulates scaled
//! frame deltas, so a host can slow the whole system down (or speed it up)
//! without touching any query code — every component downstream just sees a
//! different time value.

use crate::constants::{NORMAL_TIME_SCALE, SLOW_TIME_SCALE};
use serde::{Deserialize, Serialize};

/// Accumulating simulation clock with a rescalable rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimClock {
    elapsed: f64,
    scale: f64,
}

impl SimClock {
    /// Create a clock at time zero running at the normal scale
    pub fn new() -> Self {
        Self::with_scale(NORMAL_TIME_SCALE)
    }

    /// Create a clock at time zero with an explicit scale
    pub fn with_scale(scale: f64) -> Self {
        Self {
            elapsed: 0.0,
            scale,
        }
    }

    /// Advance by a wall-clock frame delta, returning the new simulation
    /// time
    ///
    /// The delta is multiplied by the current scale, so scale changes only
    /// affect frames advanced after the change. Non-negative deltas keep
    /// the clock monotone.
    pub fn advance(&mut self, dt: f64) -> f64 {
        self.elapsed += dt * self.scale;
        self.elapsed
    }

    /// Current simulation time
    pub fn now(&self) -> f64 {
        self.elapsed
    }

    /// Current rate scale
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Set the rate scale for future frames
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Toggle between the normal and slowed presets
    pub fn set_slow(&mut self, slow: bool) {
        self.scale = if slow { SLOW_TIME_SCALE } else { NORMAL_TIME_SCALE };
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_advance_accumulates_scaled_time() {
        let mut clock = SimClock::with_scale(0.5);
        assert_eq!(clock.now(), 0.0);

        assert_relative_eq!(clock.advance(1.0), 0.5);
        assert_relative_eq!(clock.advance(2.0), 1.5);
        assert_relative_eq!(clock.now(), 1.5);
    }

    #[test]
    fn test_scale_change_only_affects_future_frames() {
        let mut clock = SimClock::with_scale(1.0);
        clock.advance(3.0);

        clock.set_scale(0.1);
        clock.advance(10.0);
        assert_relative_eq!(clock.now(), 4.0);
    }

    #[test]
    fn test_slow_preset() {
        let mut clock = SimClock::new();
        assert_relative_eq!(clock.scale(), NORMAL_TIME_SCALE);

        clock.set_slow(true);
        assert_relative_eq!(clock.scale(), SLOW_TIME_SCALE);

        clock.set_slow(false);
        assert_relative_eq!(clock.scale(), NORMAL_TIME_SCALE);
    }
}
