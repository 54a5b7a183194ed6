//! Snake variant: grid-stepped head with a growing body
//!
//! One tick: step the head along the locked axis, apply the boundary
//! policy, advance the body, resolve the apple, then self-collision.
//! The boundary policy is fixed for the lifetime of one session.

use std::collections::VecDeque;

use rand::Rng;

use super::collision::cells_collide;
use super::entity::{Cell, Direction};
use super::state::{EndReason, GameEvent, SessionPhase, SessionRng};
use crate::config::{BoundaryPolicy, ConfigError, SnakeConfig};
use crate::consts::*;

/// Complete state of one snake play-through
#[derive(Debug, Clone)]
pub struct SnakeSession {
    config: SnakeConfig,
    pub phase: SessionPhase,
    pub score: i32,
    /// Head cell (also the front of `body` once the first tick ran)
    pub head: Cell,
    /// Apple cell; public so tests and respawn share the same state
    pub apple: Cell,
    direction: Direction,
    /// Occupied cells, head first
    body: VecDeque<Cell>,
    /// Body length ceiling; grows by one per apple
    capacity: usize,
    rng: SessionRng,
    /// Score carried out of the last ended session, for result submission
    last_score: i32,
}

impl SnakeSession {
    pub fn new(config: SnakeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            phase: SessionPhase::Idle,
            score: 0,
            head: Cell::new(SNAKE_START_X, SNAKE_START_Y),
            apple: Cell::new(0, 0),
            direction: Direction::Right,
            body: VecDeque::new(),
            capacity: SNAKE_START_CAPACITY,
            rng: SessionRng::new(0),
            last_score: 0,
        })
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    /// Final score of the most recently ended session
    pub fn last_score(&self) -> i32 {
        self.last_score
    }

    /// Reset score, body and apple, then enter `Running`
    pub fn start(&mut self, seed: u64) {
        self.rng = SessionRng::new(seed);
        self.score = 0;
        self.head = Cell::new(SNAKE_START_X, SNAKE_START_Y);
        self.direction = Direction::Right;
        self.body.clear();
        self.capacity = SNAKE_START_CAPACITY;
        self.apple = self.random_cell();
        self.phase = SessionPhase::Running;
        log::info!(
            "snake session started (seed {}, {:?} boundary)",
            self.rng.seed(),
            self.config.boundary
        );
    }

    /// Leave `Running` without reinitializing
    pub fn stop(&mut self) {
        self.phase = SessionPhase::Idle;
    }

    /// Request a direction change. Only turns onto the orthogonal axis are
    /// accepted, which rules out instant 180 reversals into the body.
    pub fn steer(&mut self, dir: Direction) {
        if self.direction.can_turn_to(dir) {
            self.direction = dir;
        }
    }

    /// Advance one grid step
    pub fn tick(&mut self, events: &mut Vec<GameEvent>) {
        if !self.phase.is_running() {
            return;
        }

        let (cols, rows) = (self.config.cols, self.config.rows);
        let mut head = self.head.stepped(self.direction);

        match self.config.boundary {
            BoundaryPolicy::Walls => {
                if head.x < 0 || head.x >= cols || head.y < 0 || head.y >= rows {
                    self.end(EndReason::BoundaryHit, events);
                    return;
                }
            }
            BoundaryPolicy::Wrap => {
                head.x = head.x.rem_euclid(cols);
                head.y = head.y.rem_euclid(rows);
            }
        }
        self.head = head;

        self.body.push_front(head);
        if self.body.len() > self.capacity {
            self.body.pop_back();
        }

        if cells_collide(head, self.apple) {
            self.capacity += 1;
            self.score += 1;
            events.push(GameEvent::Good);
            self.apple = self.random_cell();
        }

        if self.body.iter().skip(1).any(|&c| cells_collide(head, c)) {
            self.end(EndReason::SelfCollision, events);
        }
    }

    fn end(&mut self, reason: EndReason, events: &mut Vec<GameEvent>) {
        self.last_score = self.score;
        self.phase = SessionPhase::Ended(reason);
        events.push(GameEvent::Bad);
        log::info!("snake session ended: {reason:?} (score {})", self.score);
    }

    /// Uniform random grid cell (the apple may land on the body, exactly
    /// as the original behaves)
    fn random_cell(&mut self) -> Cell {
        let (cols, rows) = (self.config.cols, self.config.rows);
        let rng = self.rng.rng();
        Cell::new(rng.random_range(0..cols), rng.random_range(0..rows))
    }
}
