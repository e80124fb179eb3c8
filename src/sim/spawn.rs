//! Safe spawn point search
//!
//! A deterministic fallback chain. Each strategy runs only if the previous one
//! found nothing:
//! 1. the level's nominal spawn point
//! 2. each item position, in level order
//! 3. a spiral of rings around the nominal spawn (angle first, then radius)
//! 4. four fixed corners
//! 5. a fixed point, accepted even if it overlaps geometry

use std::f32::consts::TAU;

use glam::Vec2;

use super::geometry::LevelGeometry;
use crate::consts::*;

/// Which strategy produced the spawn point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnSource {
    Nominal,
    Item(usize),
    Spiral { ring: u32, probe: u32 },
    Corner(usize),
    /// Degraded: may overlap geometry
    Fallback,
}

/// Corner probes, tried in this order
pub const SPAWN_CORNERS: [Vec2; 4] = [
    Vec2::new(-SPAWN_CORNER_OFFSET, -SPAWN_CORNER_OFFSET),
    Vec2::new(SPAWN_CORNER_OFFSET, -SPAWN_CORNER_OFFSET),
    Vec2::new(-SPAWN_CORNER_OFFSET, SPAWN_CORNER_OFFSET),
    Vec2::new(SPAWN_CORNER_OFFSET, SPAWN_CORNER_OFFSET),
];

/// Find a point where a ball of `radius` does not overlap any obstacle
pub fn find_safe_spawn(geometry: &LevelGeometry, radius: f32) -> (Vec2, SpawnSource) {
    let is_safe = |p: Vec2| !geometry.collides(p, radius);

    let nominal = geometry.spawn();
    if is_safe(nominal) {
        return (nominal, SpawnSource::Nominal);
    }

    if let Some((i, &pos)) = geometry
        .item_positions()
        .iter()
        .enumerate()
        .find(|&(_, &p)| is_safe(p))
    {
        return (pos, SpawnSource::Item(i));
    }

    let mut ring = 0;
    let mut ring_radius = SPAWN_SPIRAL_START;
    while ring_radius <= SPAWN_SPIRAL_MAX {
        for probe in 0..SPAWN_SPIRAL_PROBES {
            let angle = probe as f32 * TAU / SPAWN_SPIRAL_PROBES as f32;
            let p = nominal + Vec2::new(angle.cos(), angle.sin()) * ring_radius;
            if is_safe(p) {
                return (p, SpawnSource::Spiral { ring, probe });
            }
        }
        ring += 1;
        ring_radius += SPAWN_SPIRAL_STEP;
    }

    if let Some((i, &corner)) = SPAWN_CORNERS.iter().enumerate().find(|&(_, &c)| is_safe(c)) {
        return (corner, SpawnSource::Corner(i));
    }

    (
        Vec2::new(SPAWN_FALLBACK.0, SPAWN_FALLBACK.1),
        SpawnSource::Fallback,
    )
}
