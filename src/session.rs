//! Caller-side frame loop
//!
//! The engine and the level countdown are independent clocks. A `Session` owns
//! both, advances the countdown only while the engine is active, and tells the
//! engine when time runs out.

use std::time::Instant;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::level::{LevelData, default_borders};
use crate::sim::{Engine, GameEvent, GamePhase, LevelTimer};
use crate::tuning::Tuning;

/// How a level attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelOutcome {
    Completed,
    TimedOut,
}

/// Summary of a finished level attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelResult {
    pub outcome: LevelOutcome,
    pub items_collected: usize,
    pub items_total: usize,
    pub time_remaining: f32,
}

/// One play session of a level
#[derive(Debug, Clone)]
pub struct Session {
    level: LevelData,
    tuning: Tuning,
    engine: Engine,
    timer: LevelTimer,
}

impl Session {
    pub fn new(level: LevelData, tuning: Tuning) -> Self {
        let engine = Engine::new(level.geometry(default_borders()), tuning.clone());
        let timer = LevelTimer::new(level.time_limit_secs);
        Self {
            level,
            tuning,
            engine,
            timer,
        }
    }

    /// Run one frame: feed `tilt` to the engine, then count down `dt` seconds
    ///
    /// Returns the events the engine produced this frame.
    pub fn frame(&mut self, tilt: Vec2, now: Instant, dt: f32) -> Vec<GameEvent> {
        self.engine.update_with_sensor_at(tilt, now);
        if self.timer.advance(dt, self.engine.is_active()) {
            self.engine.time_out();
        }
        self.engine.drain_events()
    }

    /// Throw away the current attempt and start over
    pub fn restart(&mut self) {
        log::info!("Restarting '{}'", self.level.name);
        self.engine = Engine::new(self.level.geometry(default_borders()), self.tuning.clone());
        self.timer = LevelTimer::new(self.level.time_limit_secs);
    }

    pub fn pause(&mut self) {
        self.engine.pause();
    }

    pub fn resume(&mut self) {
        self.engine.resume();
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn timer(&self) -> &LevelTimer {
        &self.timer
    }

    pub fn level(&self) -> &LevelData {
        &self.level
    }

    /// Final result, once the level has ended
    pub fn result(&self) -> Option<LevelResult> {
        let outcome = match self.engine.phase() {
            GamePhase::Playing => return None,
            GamePhase::LevelComplete => LevelOutcome::Completed,
            GamePhase::GameOver => LevelOutcome::TimedOut,
        };
        Some(LevelResult {
            outcome,
            items_collected: self.engine.collected_count(),
            items_total: self.engine.items().len(),
            time_remaining: self.timer.remaining(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const FRAME: Duration = Duration::from_millis(16);

    fn level(items: Vec<Vec2>, time_limit_secs: f32) -> LevelData {
        LevelData {
            name: "test".into(),
            spawn: Vec2::ZERO,
            obstacles: vec![],
            items,
            time_limit_secs,
        }
    }

    #[test]
    fn test_times_out() {
        let mut session = Session::new(level(vec![Vec2::new(300.0, 300.0)], 0.05), Tuning::default());
        let start = Instant::now();
        let mut events = Vec::new();
        for i in 0..5 {
            events.extend(session.frame(Vec2::ZERO, start + FRAME * i, 0.016));
        }
        assert!(events.contains(&GameEvent::GameOver));
        assert_eq!(session.engine().phase(), GamePhase::GameOver);
        let result = session.result().unwrap();
        assert_eq!(result.outcome, LevelOutcome::TimedOut);
        assert_eq!(result.items_collected, 0);
        assert_eq!(result.items_total, 1);
        assert_eq!(result.time_remaining, 0.0);
    }

    #[test]
    fn test_zero_time_limit_ends_on_first_frame() {
        let mut session = Session::new(level(vec![Vec2::new(300.0, 300.0)], 0.0), Tuning::default());
        let start = Instant::now();
        let events = session.frame(Vec2::ZERO, start, 0.016);
        assert!(events.contains(&GameEvent::GameOver));
        assert_eq!(session.engine().phase(), GamePhase::GameOver);

        let later = session.frame(Vec2::ZERO, start + FRAME, 0.016);
        assert!(!later.contains(&GameEvent::GameOver));
        assert_eq!(session.result().unwrap().outcome, LevelOutcome::TimedOut);
    }

    #[test]
    fn test_paused_clock_stands_still() {
        let mut session = Session::new(level(vec![Vec2::new(300.0, 300.0)], 1.0), Tuning::default());
        session.pause();
        let start = Instant::now();
        for i in 0..100 {
            session.frame(Vec2::ZERO, start + FRAME * i, 0.016);
        }
        assert_eq!(session.timer().remaining(), 1.0);
        assert!(session.result().is_none());
    }

    #[test]
    fn test_completion_stops_clock() {
        // Item under the spawn point is collected on the first frame
        let mut session = Session::new(level(vec![Vec2::new(5.0, 0.0)], 10.0), Tuning::default());
        let events = session.frame(Vec2::ZERO, Instant::now(), 0.016);
        assert!(events.contains(&GameEvent::ItemCollected { index: 0 }));
        assert!(events.contains(&GameEvent::LevelComplete));
        let result = session.result().unwrap();
        assert_eq!(result.outcome, LevelOutcome::Completed);
        assert_eq!(result.time_remaining, 10.0);
    }

    #[test]
    fn test_restart_rebuilds() {
        let mut session = Session::new(level(vec![Vec2::new(5.0, 0.0)], 10.0), Tuning::default());
        session.frame(Vec2::ZERO, Instant::now(), 0.016);
        assert!(session.result().is_some());

        session.restart();
        assert!(session.result().is_none());
        assert_eq!(session.engine().collected_count(), 0);
        assert_eq!(session.timer().remaining(), 10.0);
    }
}
