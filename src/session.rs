//! Session controller
//!
//! Owns one simulation plus its collaborators and drives the
//! Idle -> Running -> Ended -> Idle machine. Ticks only happen while the
//! session is `Running`; once it leaves `Running` no further ticks run,
//! which makes cancellation an explicit, testable operation rather than a
//! flag check buried in a loop body.

use glam::Vec2;

use crate::adapters::{RenderAdapter, SignalEmitter, TargetProvider};
use crate::scheduler::{FixedStep, TickDivider};
use crate::sim::{ChaseSession, GameEvent, SessionPhase, SnakeSession};

/// Contract between the controller and a simulation variant
pub trait ArcadeSim {
    /// External per-tick input (the chase target, nothing for the snake)
    type Input;

    fn phase(&self) -> SessionPhase;
    fn score(&self) -> i32;
    /// Reinitialize score and entities, then enter `Running`
    fn start(&mut self, seed: u64);
    /// Leave `Running` without reinitializing
    fn stop(&mut self);
    fn tick(&mut self, input: &Self::Input, events: &mut Vec<GameEvent>);
}

impl ArcadeSim for ChaseSession {
    type Input = Option<Vec2>;

    fn phase(&self) -> SessionPhase {
        self.phase
    }

    fn score(&self) -> i32 {
        self.score
    }

    fn start(&mut self, seed: u64) {
        ChaseSession::start(self, seed);
    }

    fn stop(&mut self) {
        ChaseSession::stop(self);
    }

    fn tick(&mut self, input: &Self::Input, events: &mut Vec<GameEvent>) {
        ChaseSession::tick(self, *input, events);
    }
}

impl ArcadeSim for SnakeSession {
    type Input = ();

    fn phase(&self) -> SessionPhase {
        self.phase
    }

    fn score(&self) -> i32 {
        self.score
    }

    fn start(&mut self, seed: u64) {
        SnakeSession::start(self, seed);
    }

    fn stop(&mut self) {
        SnakeSession::stop(self);
    }

    fn tick(&mut self, _input: &Self::Input, events: &mut Vec<GameEvent>) {
        SnakeSession::tick(self, events);
    }
}

/// Drives one simulation at a fixed cadence and fans tick events out to
/// the collaborators
pub struct SessionController<S, R, E> {
    sim: S,
    render: R,
    signals: E,
    clock: FixedStep,
    divider: TickDivider,
    events: Vec<GameEvent>,
}

impl<S, R, E> SessionController<S, R, E>
where
    S: ArcadeSim,
    R: RenderAdapter<S>,
    E: SignalEmitter,
{
    /// Controller ticking on every fixed step (chase cadence)
    pub fn new(sim: S, render: R, signals: E) -> Self {
        Self {
            sim,
            render,
            signals,
            clock: FixedStep::default(),
            divider: TickDivider::new(1),
            events: Vec::new(),
        }
    }

    /// Tick only every `divisor`-th fixed step (snake speed)
    pub fn with_divisor(mut self, divisor: u32) -> Self {
        self.divider = TickDivider::new(divisor);
        self
    }

    pub fn sim(&self) -> &S {
        &self.sim
    }

    pub fn sim_mut(&mut self) -> &mut S {
        &mut self.sim
    }

    /// Reset-and-restart: score back to 0, initial entity composition
    pub fn start(&mut self, seed: u64) {
        self.clock.reset();
        self.divider.reset();
        self.sim.start(seed);
    }

    /// Halt the tick driver; guarantees no further ticks are scheduled
    pub fn stop(&mut self) {
        self.sim.stop();
        self.clock.reset();
    }

    /// One display frame: run the fixed steps that became due, emit the
    /// collected signals, then draw. Rendering continues while Idle or
    /// Ended so frozen terminal state stays visible.
    pub fn frame(&mut self, elapsed: f32, input: &S::Input) {
        if self.sim.phase().is_running() {
            let steps = self.clock.advance(elapsed);
            for _ in 0..steps {
                // A terminal transition mid-frame cancels the remainder
                if !self.sim.phase().is_running() {
                    break;
                }
                if self.divider.fire() {
                    self.sim.tick(input, &mut self.events);
                }
            }
            for event in self.events.drain(..) {
                self.signals.emit(event);
            }
        }
        self.render.draw(&self.sim);
    }
}

impl<R, E> SessionController<ChaseSession, R, E>
where
    R: RenderAdapter<ChaseSession>,
    E: SignalEmitter,
{
    /// Frame driven by an external target provider; a stale or absent
    /// detection result simply means no seek updates this frame
    pub fn frame_from(&mut self, elapsed: f32, provider: &impl TargetProvider) {
        let target = provider.current_target();
        self.frame(elapsed, &target);
    }
}

impl<R, E> SessionController<SnakeSession, R, E>
where
    R: RenderAdapter<SnakeSession>,
    E: SignalEmitter,
{
    /// Controller with the tick divisor taken from the session's speed
    pub fn for_snake(sim: SnakeSession, render: R, signals: E) -> Self {
        let divisor = sim.config().speed.tick_divisor();
        Self::new(sim, render, signals).with_divisor(divisor)
    }
}
