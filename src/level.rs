//! Level data source
//!
//! Levels are plain JSON documents: a spawn point, obstacle rectangles, item
//! positions and a time limit. Border walls are not part of the document; they
//! are supplied separately and merged when the geometry is built.

use std::path::Path;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::LoadError;
use crate::sim::{LevelGeometry, Obstacle, circle_hits_any, circle_rect_overlap};

/// One level as supplied by the level source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub spawn: Vec2,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
    #[serde(default)]
    pub items: Vec<Vec2>,
    #[serde(default = "default_time_limit")]
    pub time_limit_secs: f32,
}

fn default_time_limit() -> f32 {
    DEFAULT_TIME_LIMIT_SECS
}

impl LevelData {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a level file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let level = Self::from_json(&json)?;
        log::info!(
            "Loaded level '{}' from {} ({} obstacles, {} items)",
            level.name,
            path.display(),
            level.obstacles.len(),
            level.items.len()
        );
        Ok(level)
    }

    pub fn to_json(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the session geometry with the given border walls
    pub fn geometry(&self, borders: impl IntoIterator<Item = Obstacle>) -> LevelGeometry {
        LevelGeometry::new(
            borders,
            self.obstacles.iter().copied(),
            self.items.clone(),
            self.spawn,
        )
    }
}

/// Four walls enclosing the square `[-half_extent, half_extent]²`, inside its edge
pub fn border_walls(half_extent: f32, thickness: f32) -> [Obstacle; 4] {
    let side = half_extent * 2.0;
    let far = half_extent - thickness;
    [
        // Top, bottom, left, right
        Obstacle::new(-half_extent, -half_extent, side, thickness),
        Obstacle::new(-half_extent, far, side, thickness),
        Obstacle::new(-half_extent, -half_extent, thickness, side),
        Obstacle::new(far, -half_extent, thickness, side),
    ]
}

/// Borders for the standard arena
pub fn default_borders() -> [Obstacle; 4] {
    border_walls(ARENA_HALF_EXTENT, BORDER_THICKNESS)
}

/// Keep-out radius around the spawn for generated obstacles
const GENERATED_SPAWN_CLEARANCE: f32 = 60.0;
/// Keep-out radius around generated items
const GENERATED_ITEM_CLEARANCE: f32 = 30.0;
/// Placement attempts per generated entity
const GENERATED_ATTEMPTS: u32 = 64;

/// Generate a level deterministically from `seed`
///
/// Obstacles never cover the spawn and items never overlap obstacles, so every
/// generated level starts at its nominal spawn.
pub fn generate(seed: u64) -> LevelData {
    let mut rng = Pcg32::seed_from_u64(seed);
    let spawn = Vec2::ZERO;
    let inner = ARENA_HALF_EXTENT - BORDER_THICKNESS;

    let obstacle_target = rng.random_range(4..=8);
    let mut obstacles = Vec::with_capacity(obstacle_target);
    for _ in 0..obstacle_target * GENERATED_ATTEMPTS as usize {
        if obstacles.len() == obstacle_target {
            break;
        }
        // Alternate between horizontal and vertical bars
        let (w, h) = if rng.random_bool(0.5) {
            (rng.random_range(60.0..220.0), rng.random_range(16.0..40.0))
        } else {
            (rng.random_range(16.0..40.0), rng.random_range(60.0..220.0))
        };
        let x = rng.random_range(-inner..inner - w);
        let y = rng.random_range(-inner..inner - h);
        let rect = Obstacle::new(x, y, w, h);
        if !circle_rect_overlap(spawn, GENERATED_SPAWN_CLEARANCE, &rect) {
            obstacles.push(rect);
        }
    }

    let item_target = rng.random_range(3..=7);
    let mut items: Vec<Vec2> = Vec::with_capacity(item_target);
    let edge = inner - GENERATED_ITEM_CLEARANCE;
    for _ in 0..item_target * GENERATED_ATTEMPTS as usize {
        if items.len() == item_target {
            break;
        }
        let pos = Vec2::new(rng.random_range(-edge..edge), rng.random_range(-edge..edge));
        let blocked = circle_hits_any(pos, GENERATED_ITEM_CLEARANCE, &obstacles)
            || pos.distance(spawn) < GENERATED_SPAWN_CLEARANCE
            || items
                .iter()
                .any(|other| other.distance(pos) < GENERATED_ITEM_CLEARANCE * 2.0);
        if !blocked {
            items.push(pos);
        }
    }

    log::debug!(
        "Generated level {}: {} obstacles, {} items",
        seed,
        obstacles.len(),
        items.len()
    );

    LevelData {
        name: format!("Generated #{seed}"),
        spawn,
        time_limit_secs: DEFAULT_TIME_LIMIT_SECS + 5.0 * items.len() as f32,
        obstacles,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        let json = r#"{
            "name": "Corridor",
            "spawn": [0.0, 0.0],
            "obstacles": [{ "x": 100.0, "y": -50.0, "width": 20.0, "height": 100.0 }],
            "items": [[-200.0, 0.0], [200.0, 200.0]]
        }"#;
        let level = LevelData::from_json(json).unwrap();
        assert_eq!(level.name, "Corridor");
        assert_eq!(level.obstacles.len(), 1);
        assert_eq!(level.items[1], Vec2::new(200.0, 200.0));
        assert_eq!(level.time_limit_secs, DEFAULT_TIME_LIMIT_SECS);
    }

    #[test]
    fn test_malformed_level_is_error() {
        assert!(matches!(
            LevelData::from_json(r#"{ "obstacles": 3 }"#),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = LevelData::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_borders_enclose_arena() {
        let walls = default_borders();
        let geometry = LevelGeometry::new(walls, [], vec![], Vec2::ZERO);
        assert!(!geometry.collides(Vec2::ZERO, 12.0));
        for corner in crate::sim::SPAWN_CORNERS {
            assert!(!geometry.collides(corner, 12.0));
        }
        assert!(geometry.collides(Vec2::new(475.0, 0.0), 12.0));
        assert!(geometry.collides(Vec2::new(0.0, -475.0), 12.0));
        assert!(geometry.collides(Vec2::new(-475.0, 0.0), 12.0));
        assert!(geometry.collides(Vec2::new(0.0, 475.0), 12.0));
    }

    #[test]
    fn test_geometry_merges_borders() {
        let level = generate(7);
        let geometry = level.geometry(default_borders());
        assert_eq!(geometry.obstacles().len(), level.obstacles.len() + 4);
        assert_eq!(geometry.item_positions(), level.items.as_slice());
    }

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(generate(42), generate(42));
        assert_ne!(generate(42), generate(43));
    }

    #[test]
    fn test_generated_levels_are_playable() {
        for seed in 0..20 {
            let level = generate(seed);
            let geometry = level.geometry(default_borders());
            assert!(!geometry.collides(level.spawn, 12.0), "seed {seed}");
            assert!(!level.items.is_empty(), "seed {seed}");
            for item in &level.items {
                assert!(!geometry.collides(*item, 12.0), "seed {seed}");
            }
        }
    }

    #[test]
    fn test_json_round_trip_preserves_level() {
        let level = generate(3);
        let json = level.to_json().unwrap();
        assert_eq!(LevelData::from_json(&json).unwrap(), level);
    }
}
