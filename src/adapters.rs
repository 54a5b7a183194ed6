//! Collaborator contracts
//!
//! The core consumes these interfaces; their implementations (camera
//! tracking, canvas drawing, audio) live in the surrounding application.

use glam::Vec2;

use crate::sim::GameEvent;

/// Supplies the externally tracked point seekers pursue. Refreshed at its
/// own cadence; the core tolerates staleness and absence.
pub trait TargetProvider {
    fn current_target(&self) -> Option<Vec2>;
}

/// Draws the current simulation state. Called once per frame after the
/// step; purely a side effect.
pub trait RenderAdapter<S> {
    fn draw(&mut self, sim: &S);
}

/// Receives tick side-effect signals (audio, flashes). Fire-and-forget:
/// implementations must swallow their own failures rather than panic,
/// so an audio error can never abort a tick.
pub trait SignalEmitter {
    fn emit(&mut self, event: GameEvent);
}

/// Target provider that never sees anything
pub struct NoTarget;

impl TargetProvider for NoTarget {
    fn current_target(&self) -> Option<Vec2> {
        None
    }
}

/// Render adapter that draws nowhere
pub struct NullRender;

impl<S> RenderAdapter<S> for NullRender {
    fn draw(&mut self, _sim: &S) {}
}

/// Signal emitter that drops everything
pub struct NullSignals;

impl SignalEmitter for NullSignals {
    fn emit(&mut self, _event: GameEvent) {}
}
