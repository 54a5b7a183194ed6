//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Index-stable mutation during collision passes
//! - No rendering or platform dependencies

pub mod chase;
pub mod collision;
pub mod entity;
pub mod snake;
pub mod state;

pub use chase::ChaseSession;
pub use collision::{cells_collide, circles_collide};
pub use entity::{Cell, Direction, Dot, Seeker};
pub use snake::SnakeSession;
pub use state::{EndReason, GameEvent, SessionPhase, SessionRng};
