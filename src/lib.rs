//! Tilt Maze - a tilt-controlled ball maze
//!
//! Core modules:
//! - `sim`: Simulation core (ball physics, collisions, pickups, power-ups, game phase)
//! - `level`: Level data source (JSON levels, border walls, procedural levels)
//! - `session`: Caller-side frame loop reconciling the engine with the level countdown
//! - `tuning`: Data-driven physics constants
//! - `settings`: Tilt input calibration

pub mod error;
pub mod level;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::LoadError;
pub use level::LevelData;
pub use session::{LevelOutcome, LevelResult, Session};
pub use settings::InputSettings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Minimum wall-clock gap between accepted updates (~60 Hz)
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

    /// Half-width of the square play area, centered on the origin
    pub const ARENA_HALF_EXTENT: f32 = 500.0;
    /// Border wall thickness
    pub const BORDER_THICKNESS: f32 = 20.0;

    /// Spiral spawn search: first ring radius
    pub const SPAWN_SPIRAL_START: f32 = 50.0;
    /// Spiral spawn search: ring growth per step
    pub const SPAWN_SPIRAL_STEP: f32 = 30.0;
    /// Spiral spawn search: largest ring radius
    pub const SPAWN_SPIRAL_MAX: f32 = 300.0;
    /// Spiral spawn search: probes per ring
    pub const SPAWN_SPIRAL_PROBES: u32 = 24;
    /// Corner probes sit this far from the origin on both axes
    pub const SPAWN_CORNER_OFFSET: f32 = 450.0;
    /// Last-resort spawn point, accepted without a collision check
    pub const SPAWN_FALLBACK: (f32, f32) = (100.0, 100.0);

    /// Default countdown for a level (seconds)
    pub const DEFAULT_TIME_LIMIT_SECS: f32 = 60.0;
}
