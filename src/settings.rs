//! Tilt input calibration
//!
//! Maps raw accelerometer samples onto the tilt vector the engine expects.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Player-adjustable tilt preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Multiplier applied to the raw sample
    pub sensitivity: f32,
    /// Flip the horizontal axis
    pub invert_x: bool,
    /// Flip the vertical axis
    pub invert_y: bool,
    /// Per-axis magnitude below which a reading counts as level
    pub dead_zone: f32,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            sensitivity: 1.0,
            invert_x: false,
            invert_y: false,
            dead_zone: 0.0,
        }
    }
}

impl InputSettings {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert a raw sensor reading into an engine tilt vector
    pub fn apply(&self, raw: Vec2) -> Vec2 {
        let dead = |v: f32| if v.abs() < self.dead_zone { 0.0 } else { v };
        let sign = |invert: bool| if invert { -1.0 } else { 1.0 };
        Vec2::new(
            dead(raw.x) * sign(self.invert_x),
            dead(raw.y) * sign(self.invert_y),
        ) * self.sensitivity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let settings = InputSettings::default();
        assert_eq!(settings.apply(Vec2::new(1.5, -2.0)), Vec2::new(1.5, -2.0));
    }

    #[test]
    fn test_invert_and_scale() {
        let settings = InputSettings {
            sensitivity: 2.0,
            invert_x: true,
            ..Default::default()
        };
        assert_eq!(settings.apply(Vec2::new(1.0, 1.0)), Vec2::new(-2.0, 2.0));
    }

    #[test]
    fn test_dead_zone() {
        let settings = InputSettings::from_json(r#"{ "dead_zone": 0.2 }"#).unwrap();
        assert_eq!(settings.apply(Vec2::new(0.1, -0.5)), Vec2::new(0.0, -0.5));
    }
}
