//! Collision predicates
//!
//! Brute-force pairwise checks over small entity counts (tens at most).
//! Two policies: circle proximity on the continuous field and exact cell
//! equality on the grid.

use glam::Vec2;

use super::entity::Cell;

/// Two circles collide when the distance between centers is strictly less
/// than the sum of their radii. Touching circles (distance == r1 + r2) do
/// NOT collide. Compared in squared space to avoid a sqrt.
#[inline]
pub fn circles_collide(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    a.distance_squared(b) < reach * reach
}

/// Grid entities collide only on exact cell equality
#[inline]
pub fn cells_collide(a: Cell, b: Cell) -> bool {
    a == b
}
