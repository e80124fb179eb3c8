//! Level countdown
//!
//! Runs beside the engine, not inside it. The caller advances it only while the
//! engine reports itself active and calls `Engine::time_out` when it expires.

/// Countdown for one level attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelTimer {
    limit: f32,
    remaining: f32,
    /// Expiry already reported by `advance`
    fired: bool,
}

impl LevelTimer {
    pub fn new(limit_secs: f32) -> Self {
        let limit = limit_secs.max(0.0);
        Self {
            limit,
            remaining: limit,
            fired: false,
        }
    }

    pub fn limit(&self) -> f32 {
        self.limit
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Count down by `dt` if `active`
    ///
    /// Returns true exactly once: on the first active call that finds the
    /// timer at zero. A zero-length timer fires on its first active call.
    /// Non-finite or non-positive `dt` does not count down.
    pub fn advance(&mut self, dt: f32, active: bool) -> bool {
        if !active || self.fired {
            return false;
        }
        if dt.is_finite() && dt > 0.0 {
            self.remaining = (self.remaining - dt).max(0.0);
        }
        if self.expired() {
            self.fired = true;
        }
        self.fired
    }

    /// Refill to the full limit and re-arm expiry
    pub fn reset(&mut self) {
        self.remaining = self.limit;
        self.fired = false;
    }
}
