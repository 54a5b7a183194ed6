//! Session configuration
//!
//! Options are chosen before a session enters `Running` and stay fixed for
//! its lifetime. Unknown keys fail fast instead of silently defaulting.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Configuration errors, surfaced at session start
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unrecognized speed `{0}` (expected slow, normal, fast or superfast)")]
    UnknownSpeed(String),
    #[error("play field too small: {width}x{height}")]
    FieldTooSmall { width: f32, height: f32 },
    #[error("grid too small: {cols}x{rows}")]
    GridTooSmall { cols: i32, rows: i32 },
}

/// Speed presets shared by both variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Speed {
    Slow,
    #[default]
    Normal,
    Fast,
    Superfast,
}

impl Speed {
    /// Parse a speed key; unknown keys are a configuration bug
    pub fn from_key(key: &str) -> Result<Self, ConfigError> {
        match key.to_lowercase().as_str() {
            "slow" => Ok(Speed::Slow),
            "normal" => Ok(Speed::Normal),
            "fast" => Ok(Speed::Fast),
            "superfast" => Ok(Speed::Superfast),
            _ => Err(ConfigError::UnknownSpeed(key.to_string())),
        }
    }

    /// Display label (used in leaderboard entries)
    pub fn label(&self) -> &'static str {
        match self {
            Speed::Slow => "Slow",
            Speed::Normal => "Normal",
            Speed::Fast => "Fast",
            Speed::Superfast => "Superfast",
        }
    }

    /// Step-length multiplier applied to every seeker per tick
    pub fn multiplier(&self) -> f32 {
        match self {
            Speed::Slow => 0.5,
            Speed::Normal => 1.0,
            Speed::Fast => 1.5,
            Speed::Superfast => 2.0,
        }
    }

    /// Frames per grid step for the snake (higher = slower)
    pub fn tick_divisor(&self) -> u32 {
        match self {
            Speed::Slow => 8,
            Speed::Normal => 4,
            Speed::Fast => 2,
            Speed::Superfast => 1,
        }
    }
}

/// Boundary handling for the snake variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BoundaryPolicy {
    /// Out-of-bounds positions teleport to the opposite edge
    #[default]
    Wrap,
    /// Any out-of-bounds position ends the session
    Walls,
}

/// Chase variant configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChaseConfig {
    /// Play-field size in the same units as entity positions
    pub width: f32,
    pub height: f32,
    pub speed: Speed,
    pub seeker_count: usize,
    pub dot_count: usize,
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            speed: Speed::Normal,
            seeker_count: SEEKER_COUNT,
            dot_count: DOT_COUNT,
        }
    }
}

impl ChaseConfig {
    /// The field must fit the largest entity fully inset
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min = 2.0 * SEEKER_RADIUS.max(DOT_RADIUS);
        if self.width <= min || self.height <= min {
            return Err(ConfigError::FieldTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Snake variant configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnakeConfig {
    /// Grid size in cells
    pub cols: i32,
    pub rows: i32,
    pub speed: Speed,
    pub boundary: BoundaryPolicy,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            cols: GRID_COLS,
            rows: GRID_ROWS,
            speed: Speed::Normal,
            boundary: BoundaryPolicy::Wrap,
        }
    }
}

impl SnakeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Start cell plus initial body must fit
        if self.cols <= SNAKE_START_X + 1 || self.rows <= SNAKE_START_Y + 1 {
            return Err(ConfigError::GridTooSmall {
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(())
    }
}
