//! Session phases, terminal outcomes and tick events

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Score reached the victory threshold. `superfast` is set when the
    /// fastest speed preset was active (the presentation layer shows a
    /// flourish for it).
    Victory { superfast: bool },
    /// Snake head left the grid with walls enabled
    BoundaryHit,
    /// Snake head entered one of its own body cells
    SelfCollision,
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SessionPhase {
    /// No simulation ticks occur
    #[default]
    Idle,
    /// A fixed-cadence driver advances the simulation once per tick
    Running,
    /// Terminal; entity state is frozen for display
    Ended(EndReason),
}

impl SessionPhase {
    pub fn is_running(&self) -> bool {
        matches!(self, SessionPhase::Running)
    }
}

/// Side-effect signals produced by a tick, consumed fire-and-forget
/// by the surrounding application (audio, flashes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Collectible picked up (score incremented)
    Good,
    /// Hostile contact (score decremented) or session lost
    Bad,
    /// Victory threshold reached
    Victory,
}

/// Seeded RNG handle; every spawn draws from here so a session
/// replays identically for the same seed
#[derive(Debug, Clone)]
pub struct SessionRng {
    seed: u64,
    rng: Pcg32,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// The seed this handle was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}
