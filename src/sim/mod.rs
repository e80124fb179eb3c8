//! Simulation core
//!
//! All gameplay logic lives here. Nothing in this module renders, persists or
//! touches a platform API:
//! - One ball, integrated from tilt input
//! - Axis-separated collision against rectangular obstacles
//! - Item pickups, timed power-ups, level phase

pub mod collision;
pub mod engine;
pub mod geometry;
pub mod power;
pub mod spawn;
pub mod state;
pub mod timer;

pub use collision::{circle_hits_any, circle_rect_overlap, circles_overlap};
pub use engine::Engine;
pub use geometry::{LevelGeometry, Obstacle};
pub use power::{PowerInfo, PowerKind, PowerState};
pub use spawn::{SPAWN_CORNERS, SpawnSource, find_safe_spawn};
pub use state::{Ball, EngineSnapshot, GameEvent, GamePhase, Item};
pub use timer::LevelTimer;
