//! Per-frame simulation
//!
//! The engine owns the ball, the items, the power state and the level phase.
//! Tilt samples arrive at the sensor's own rate; the engine admits at most one
//! per frame interval and drops the rest.

use std::time::Instant;

use glam::Vec2;

use super::collision::circles_overlap;
use super::geometry::LevelGeometry;
use super::power::{PowerInfo, PowerKind, PowerState};
use super::spawn::{SpawnSource, find_safe_spawn};
use super::state::{Ball, EngineSnapshot, GameEvent, GamePhase, Item};
use crate::tuning::Tuning;

/// Tilt-maze simulation for one level
#[derive(Debug, Clone)]
pub struct Engine {
    geometry: LevelGeometry,
    tuning: Tuning,
    ball: Ball,
    items: Vec<Item>,
    phase: GamePhase,
    paused: bool,
    power: PowerState,
    /// Time of the last admitted update (None until the first one)
    last_update: Option<Instant>,
    spawn_source: SpawnSource,
    events: Vec<GameEvent>,
}

impl Engine {
    /// Build an engine for `geometry` and place the ball
    pub fn new(geometry: LevelGeometry, tuning: Tuning) -> Self {
        let ball = Ball::new(geometry.spawn(), tuning.ball_radius);
        let mut engine = Self {
            geometry,
            tuning,
            ball,
            items: Vec::new(),
            phase: GamePhase::Playing,
            paused: false,
            power: PowerState::default(),
            last_update: None,
            spawn_source: SpawnSource::Nominal,
            events: Vec::new(),
        };
        engine.load_level();
        engine
    }

    /// Reset flags, respawn the ball and restore every item
    ///
    /// Also the restart path: pending events from the previous attempt are
    /// discarded and the frame throttle starts fresh.
    pub fn load_level(&mut self) {
        self.phase = GamePhase::Playing;
        self.power.clear();
        self.paused = false;
        self.ball.vel = Vec2::ZERO;
        self.last_update = None;
        self.events.clear();

        let (spawn, source) = find_safe_spawn(&self.geometry, self.ball.radius);
        match source {
            SpawnSource::Fallback => log::warn!(
                "No safe spawn found, placing ball at fallback ({}, {})",
                spawn.x,
                spawn.y
            ),
            _ => log::debug!("Spawn at ({}, {}) via {:?}", spawn.x, spawn.y, source),
        }
        self.ball.pos = spawn;
        self.spawn_source = source;

        let item_radius = self.tuning.item_radius;
        self.items = self
            .geometry
            .item_positions()
            .iter()
            .map(|&pos| Item::new(pos, item_radius))
            .collect();

        log::info!(
            "Level loaded: {} obstacles, {} items",
            self.geometry.obstacles().len(),
            self.items.len()
        );
    }

    /// Feed a tilt sample using the current wall-clock time
    pub fn update_with_sensor(&mut self, ax: f32, ay: f32) -> bool {
        self.update_with_sensor_at(Vec2::new(ax, ay), Instant::now())
    }

    /// Feed a tilt sample observed at `now`
    ///
    /// Returns true if the sample was simulated. Samples closer than the frame
    /// interval to the last admitted one are dropped without touching state.
    pub fn update_with_sensor_at(&mut self, tilt: Vec2, now: Instant) -> bool {
        if let Some(last) = self.last_update
            && now.saturating_duration_since(last) < self.tuning.frame_interval()
        {
            return false;
        }
        self.last_update = Some(now);

        if self.phase != GamePhase::Playing || self.paused {
            return false;
        }

        // Fixed decrement, not measured time
        if let Some(expired) = self.power.tick(self.tuning.power_tick) {
            log::debug!("{:?} expired", expired);
            self.events.push(GameEvent::PowerExpired(expired));
        }

        let (accel, max_speed) = self.power.movement(&self.tuning);
        let vel = self.ball.vel + tilt * accel;
        self.ball.vel = vel.clamp(Vec2::splat(-max_speed), Vec2::splat(max_speed));

        self.move_ball();
        self.collect_items();

        if self.items.iter().all(Item::collected) {
            self.phase = GamePhase::LevelComplete;
            log::info!("Level complete ({} items)", self.items.len());
            self.events.push(GameEvent::LevelComplete);
        }

        self.events.push(GameEvent::Ticked);
        true
    }

    /// Axis-separated movement with bounce, then friction
    fn move_ball(&mut self) {
        let ball = &mut self.ball;

        if self.power.is_ghost() {
            ball.pos += ball.vel;
        } else {
            let mut collided = false;

            let next_x = Vec2::new(ball.pos.x + ball.vel.x, ball.pos.y);
            if self.geometry.collides(next_x, ball.radius) {
                ball.vel.x = -ball.vel.x * self.tuning.restitution;
                collided = true;
            } else {
                ball.pos.x = next_x.x;
            }

            let next_y = Vec2::new(ball.pos.x, ball.pos.y + ball.vel.y);
            if self.geometry.collides(next_y, ball.radius) {
                ball.vel.y = -ball.vel.y * self.tuning.restitution;
                collided = true;
            } else {
                ball.pos.y = next_y.y;
            }

            // Push off the wall so the ball does not stick
            if collided {
                ball.pos += ball.vel * self.tuning.unstick_nudge;
            }
        }

        ball.vel *= self.tuning.friction;
    }

    fn collect_items(&mut self) {
        let ball = self.ball;
        for (index, item) in self.items.iter_mut().enumerate() {
            if item.collected() {
                continue;
            }
            if circles_overlap(ball.pos, ball.radius, item.pos, item.radius) && item.collect() {
                self.events.push(GameEvent::ItemCollected { index });
            }
        }
    }

    /// Start a speed boost, replacing any running power
    pub fn activate_speed_boost(&mut self) {
        self.activate_power(PowerKind::SpeedBoost, self.tuning.speed_boost_secs);
    }

    /// Start ghost mode, replacing any running power
    pub fn activate_ghost_mode(&mut self) {
        self.activate_power(PowerKind::GhostMode, self.tuning.ghost_mode_secs);
    }

    fn activate_power(&mut self, kind: PowerKind, duration: f32) {
        self.power.activate(kind, duration);
        log::info!("{:?} activated for {}s", kind, duration);
        self.events.push(GameEvent::PowerActivated(kind));
    }

    /// Stop the ball and block updates until `resume`
    pub fn pause(&mut self) {
        self.paused = true;
        self.ball.vel = Vec2::ZERO;
    }

    /// Allow updates again; velocity restarts from zero
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Countdown expired. Ignored once the level has already ended.
    pub fn time_out(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::GameOver;
            log::info!(
                "Time up with {}/{} items",
                self.collected_count(),
                self.items.len()
            );
            self.events.push(GameEvent::GameOver);
        }
    }

    /// Whether the countdown should keep running
    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Playing && !self.paused
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_position(&self) -> Vec2 {
        self.ball.pos
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn collected_count(&self) -> usize {
        self.items.iter().filter(|item| item.collected()).count()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn power_info(&self) -> PowerInfo {
        self.power.info()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn geometry(&self) -> &LevelGeometry {
        &self.geometry
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// How the current spawn point was found
    pub fn spawn_source(&self) -> SpawnSource {
        self.spawn_source
    }

    /// Take all events emitted since the last drain, in order
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            ball: self.ball,
            items: self.items.clone(),
            phase: self.phase,
            power: self.power.info(),
            paused: self.paused,
        }
    }
}
