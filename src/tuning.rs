//! Data-driven physics constants
//!
//! Defaults reproduce the shipped feel. A JSON document only needs to name the
//! fields it overrides.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Physics tuning for one play session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ball collision radius
    pub ball_radius: f32,
    /// Item pickup radius
    pub item_radius: f32,

    /// Tilt-to-velocity factor without speed boost
    pub base_acceleration: f32,
    /// Per-axis velocity cap without speed boost
    pub base_max_speed: f32,
    /// Tilt-to-velocity factor while speed boost is active
    pub boost_acceleration: f32,
    /// Per-axis velocity cap while speed boost is active
    pub boost_max_speed: f32,

    /// Velocity multiplier applied every accepted frame
    pub friction: f32,
    /// Velocity multiplier (after inversion) on a blocked axis
    pub restitution: f32,
    /// Fraction of velocity added to position after any bounce
    pub unstick_nudge: f32,

    /// Minimum time between accepted updates (milliseconds)
    pub frame_interval_ms: u64,
    /// Power timer decrement per accepted update (seconds, assumes 60 Hz)
    pub power_tick: f32,
    /// Speed boost duration (seconds)
    pub speed_boost_secs: f32,
    /// Ghost mode duration (seconds)
    pub ghost_mode_secs: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ball_radius: 12.0,
            item_radius: 10.0,

            base_acceleration: 0.5,
            base_max_speed: 8.0,
            boost_acceleration: 0.8,
            boost_max_speed: 12.0,

            friction: 0.90,
            restitution: 0.8,
            unstick_nudge: 0.1,

            frame_interval_ms: crate::consts::FRAME_INTERVAL.as_millis() as u64,
            power_tick: 0.016,
            speed_boost_secs: 25.0,
            ghost_mode_secs: 15.0,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON (missing fields keep their defaults)
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Frame throttle interval as a `Duration`
    #[inline]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}
