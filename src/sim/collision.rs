//! Collision tests between the ball and rectangular obstacles
//!
//! Obstacle counts are small (tens of rectangles), so every query is a plain
//! linear scan.

use glam::Vec2;

use super::geometry::Obstacle;

/// Check overlap between a circle and an axis-aligned rectangle
///
/// Clamps the circle center onto the rectangle and compares the squared
/// distance against the squared radius. Touching is not overlapping.
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Obstacle) -> bool {
    if rect.is_degenerate() {
        return false;
    }
    let closest = rect.closest_point(center);
    center.distance_squared(closest) < radius * radius
}

/// Check a circle against every obstacle in the set
pub fn circle_hits_any(center: Vec2, radius: f32, obstacles: &[Obstacle]) -> bool {
    obstacles
        .iter()
        .any(|rect| circle_rect_overlap(center, radius, rect))
}

/// Check if the ball overlaps an item's pickup circle
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}
