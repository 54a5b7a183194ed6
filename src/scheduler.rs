//! Tick scheduling
//!
//! The driver is display-synchronized: the host calls in once per refresh
//! with the elapsed wall time, and `FixedStep` converts that into zero or
//! more fixed-size simulation steps. `TickDivider` slows the effective
//! update rate for the grid variant without changing the render rate.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Fixed-timestep accumulator
#[derive(Debug, Clone)]
pub struct FixedStep {
    dt: f32,
    accumulator: f32,
}

impl FixedStep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Fold in elapsed wall time and return how many fixed steps are due.
    /// Steps are capped at `MAX_SUBSTEPS` to prevent a spiral of death
    /// after a long stall; the surplus time is discarded.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        // A hidden tab or breakpoint can report huge deltas
        self.accumulator += elapsed.clamp(0.0, 0.1);

        let mut steps = 0;
        while self.accumulator >= self.dt && steps < MAX_SUBSTEPS {
            self.accumulator -= self.dt;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS {
            self.accumulator = 0.0;
        }
        steps
    }

    /// Drop any banked time (on session start/stop)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT)
    }
}

/// Passes one tick through for every `divisor` offered
#[derive(Debug, Clone)]
pub struct TickDivider {
    divisor: u32,
    count: u32,
}

impl TickDivider {
    /// A zero divisor is treated as 1 (every tick fires)
    pub fn new(divisor: u32) -> Self {
        Self {
            divisor: divisor.max(1),
            count: 0,
        }
    }

    /// Returns true on every `divisor`-th call
    pub fn fire(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.divisor {
            self.count = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}
