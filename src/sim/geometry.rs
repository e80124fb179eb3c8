//! Static level geometry
//!
//! Obstacles are axis-aligned rectangles in level-local coordinates. Border walls
//! and level obstacles are merged into one list when the geometry is built, and
//! nothing about a `LevelGeometry` changes afterwards.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::circle_hits_any;

/// An axis-aligned rectangular obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner (smallest x and y)
    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Bottom-right corner (largest x and y)
    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// A rectangle with negative extent cannot be hit
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width >= 0.0 && self.height >= 0.0)
    }

    /// Closest point on (or in) the rectangle to `point`
    #[inline]
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min(), self.max())
    }
}

/// Immutable geometry for one level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelGeometry {
    /// Borders first, then level obstacles
    obstacles: Vec<Obstacle>,
    /// Item centers, in level order
    items: Vec<Vec2>,
    /// Nominal ball spawn point
    spawn: Vec2,
}

impl LevelGeometry {
    pub fn new(
        borders: impl IntoIterator<Item = Obstacle>,
        obstacles: impl IntoIterator<Item = Obstacle>,
        items: Vec<Vec2>,
        spawn: Vec2,
    ) -> Self {
        let obstacles: Vec<Obstacle> = borders.into_iter().chain(obstacles).collect();
        Self {
            obstacles,
            items,
            spawn,
        }
    }

    /// Every obstacle in the collision set (borders included)
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn item_positions(&self) -> &[Vec2] {
        &self.items
    }

    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    /// True if a circle at `center` would overlap any obstacle
    pub fn collides(&self, center: Vec2, radius: f32) -> bool {
        circle_hits_any(center, radius, &self.obstacles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borders_come_first() {
        let border = Obstacle::new(-10.0, -10.0, 5.0, 20.0);
        let inner = Obstacle::new(0.0, 0.0, 1.0, 1.0);
        let geometry = LevelGeometry::new([border], [inner], vec![], Vec2::ZERO);
        assert_eq!(geometry.obstacles(), &[border, inner]);
    }

    #[test]
    fn test_closest_point_clamps() {
        let rect = Obstacle::new(0.0, 0.0, 10.0, 4.0);
        assert_eq!(rect.closest_point(Vec2::new(-5.0, 2.0)), Vec2::new(0.0, 2.0));
        assert_eq!(rect.closest_point(Vec2::new(5.0, 9.0)), Vec2::new(5.0, 4.0));
        assert_eq!(rect.closest_point(Vec2::new(3.0, 3.0)), Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_empty_geometry_never_collides() {
        let geometry = LevelGeometry::new([], [], vec![], Vec2::ZERO);
        assert!(!geometry.collides(Vec2::ZERO, 1000.0));
    }
}
