//! Arcade Loop Engine - a reusable fixed-cadence arcade simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, per-tick step)
//! - `session`: Start/reset/game-over state machine driving the simulation
//! - `scheduler`: Fixed-timestep accumulator and tick divider
//! - `adapters`: Collaborator contracts (target input, rendering, signals)
//! - `leaderboard`: Local score table persisted through a key-value store
//!
//! Two instantiations share the core: a target-chase game (seekers pursue
//! an externally tracked point on a continuous field) and a grid snake.

pub mod adapters;
pub mod config;
pub mod leaderboard;
pub mod scheduler;
pub mod session;
pub mod sim;

pub use adapters::{RenderAdapter, SignalEmitter, TargetProvider};
pub use config::{BoundaryPolicy, ChaseConfig, ConfigError, SnakeConfig, Speed};
pub use leaderboard::{KvStore, Leaderboard, LeaderboardEntry, MemoryStore};
pub use session::{ArcadeSim, SessionController};
pub use sim::{ChaseSession, EndReason, GameEvent, SessionPhase, SnakeSession};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (matched to a 60 Hz display)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Score at which a chase session ends in victory
    pub const VICTORY_SCORE: i32 = 20;

    /// Radius of the externally tracked target point
    pub const TARGET_RADIUS: f32 = 6.0;
    /// Seeker (hostile) radius
    pub const SEEKER_RADIUS: f32 = 15.0;
    /// Seeker step length per tick before the speed multiplier
    pub const SEEKER_BASE_SPEED: f32 = 1.5;
    /// Collectible dot radius
    pub const DOT_RADIUS: f32 = 12.0;

    /// Initial chase populations
    pub const SEEKER_COUNT: usize = 3;
    pub const DOT_COUNT: usize = 5;

    /// Default snake grid (cells)
    pub const GRID_COLS: i32 = 20;
    pub const GRID_ROWS: i32 = 20;
    /// Snake starting cell and body capacity
    pub const SNAKE_START_X: i32 = 4;
    pub const SNAKE_START_Y: i32 = 4;
    pub const SNAKE_START_CAPACITY: usize = 4;
}
