//! Simulation entity types
//!
//! The ball, the collectible items and the level phase, plus the events the
//! engine emits for the caller to drain.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::power::{PowerInfo, PowerKind};

/// Current phase of the level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball is live
    #[default]
    Playing,
    /// Every item collected (terminal)
    LevelComplete,
    /// Countdown ran out (terminal)
    GameOver,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// The player's ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }
}

/// A collectible item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub pos: Vec2,
    pub radius: f32,
    collected: bool,
}

impl Item {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            collected: false,
        }
    }

    pub fn collected(&self) -> bool {
        self.collected
    }

    /// Mark collected. Returns true only on the first call.
    pub fn collect(&mut self) -> bool {
        !std::mem::replace(&mut self.collected, true)
    }
}

/// Notifications produced by the engine, drained by the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Item at `index` was picked up (fires once per item)
    ItemCollected { index: usize },
    /// A power was activated (fires on every activation)
    PowerActivated(PowerKind),
    /// A power ran out
    PowerExpired(PowerKind),
    /// All items collected
    LevelComplete,
    /// Countdown expired while playing
    GameOver,
    /// An update was accepted and simulated
    Ticked,
}

/// Consistent copy of everything a renderer reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub ball: Ball,
    pub items: Vec<Item>,
    pub phase: GamePhase,
    pub power: PowerInfo,
    pub paused: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_collects_once() {
        let mut item = Item::new(Vec2::ZERO, 10.0);
        assert!(!item.collected());
        assert!(item.collect());
        assert!(item.collected());
        assert!(!item.collect());
        assert!(item.collected());
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!GamePhase::Playing.is_terminal());
        assert!(GamePhase::LevelComplete.is_terminal());
        assert!(GamePhase::GameOver.is_terminal());
    }
}
