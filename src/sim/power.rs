//! Timed power-ups
//!
//! At most one power is active. Activating a power replaces whatever was running
//! and restarts the timer; nothing stacks or queues.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Power-up kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PowerKind {
    #[default]
    None,
    /// Higher acceleration and velocity cap
    SpeedBoost,
    /// Ball passes through obstacles
    GhostMode,
}

/// Active power and its remaining time
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PowerState {
    kind: PowerKind,
    remaining: f32,
}

/// Read-only view of the power state for UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerInfo {
    pub kind: PowerKind,
    pub remaining_time: f32,
    pub is_active: bool,
}

impl PowerState {
    pub fn kind(&self) -> PowerKind {
        self.kind
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_active(&self) -> bool {
        self.kind != PowerKind::None
    }

    pub fn is_ghost(&self) -> bool {
        self.kind == PowerKind::GhostMode
    }

    /// Start `kind` with a fresh timer, replacing any running power
    pub fn activate(&mut self, kind: PowerKind, duration: f32) {
        if kind == PowerKind::None || duration <= 0.0 {
            self.clear();
            return;
        }
        self.kind = kind;
        self.remaining = duration;
    }

    pub fn clear(&mut self) {
        self.kind = PowerKind::None;
        self.remaining = 0.0;
    }

    /// Count down by `dt`. Returns the kind that expired this tick, if any.
    pub fn tick(&mut self, dt: f32) -> Option<PowerKind> {
        if !self.is_active() {
            return None;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            let expired = self.kind;
            self.clear();
            Some(expired)
        } else {
            None
        }
    }

    pub fn info(&self) -> PowerInfo {
        PowerInfo {
            kind: self.kind,
            remaining_time: self.remaining,
            is_active: self.is_active(),
        }
    }

    /// Acceleration factor and per-axis velocity cap for the current power
    pub fn movement(&self, tuning: &Tuning) -> (f32, f32) {
        match self.kind {
            PowerKind::SpeedBoost => (tuning.boost_acceleration, tuning.boost_max_speed),
            PowerKind::None | PowerKind::GhostMode => {
                (tuning.base_acceleration, tuning.base_max_speed)
            }
        }
    }
}
