//! Entity kinds and their movement rules
//!
//! Each kind carries only the fields its rule needs: `Seeker` moves toward
//! the external target, `Dot` is static between respawns, and the snake head
//! steps by whole grid cells along a locked axis.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A hostile entity that pursues the target point
#[derive(Debug, Clone, PartialEq)]
pub struct Seeker {
    pub pos: Vec2,
    pub radius: f32,
    /// Step length per tick before the speed multiplier
    pub speed: f32,
}

impl Seeker {
    /// Spawn on a uniformly chosen edge of the field, at a uniform
    /// position along it
    pub fn spawn_on_edge(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        let (x, y) = match rng.random_range(0..4u8) {
            0 => (rng.random_range(0.0..width), 0.0),
            1 => (width, rng.random_range(0.0..height)),
            2 => (rng.random_range(0.0..width), height),
            _ => (0.0, rng.random_range(0.0..height)),
        };
        Self {
            pos: Vec2::new(x, y),
            radius: SEEKER_RADIUS,
            speed: SEEKER_BASE_SPEED,
        }
    }

    /// Move one step toward `target`. The distance is floored at 1 unit
    /// before dividing so a seeker sitting on the target never produces NaN.
    pub fn seek(&mut self, target: Vec2, multiplier: f32) {
        let delta = target - self.pos;
        let dist = delta.length().max(1.0);
        self.pos += delta / dist * (self.speed * multiplier);
    }
}

/// A static collectible; only moves through respawn
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub pos: Vec2,
    pub radius: f32,
}

impl Dot {
    /// Spawn uniformly at random, inset by the dot's own radius so it is
    /// never partially outside the field
    pub fn spawn_inset(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        let radius = DOT_RADIUS;
        Self {
            pos: Vec2::new(
                rng.random_range(radius..=width - radius),
                rng.random_range(radius..=height - radius),
            ),
            radius,
        }
    }
}

/// A grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step in `dir`
    pub fn stepped(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Axis of travel on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Travel direction of the snake head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// A turn is legal only onto the orthogonal axis; this rejects both
    /// instant 180 reversals and redundant same-direction commands
    pub fn can_turn_to(self, next: Direction) -> bool {
        self.axis() != next.axis()
    }
}
