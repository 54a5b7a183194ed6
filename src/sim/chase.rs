//! Chase variant: seekers pursue an externally tracked point
//!
//! One tick, in order: move seekers, resolve target-vs-seeker hits,
//! merge overlapping seekers, resolve target-vs-dot pickups. The target
//! position arrives from outside each tick and may be absent; a tick
//! without a target mutates nothing.

use glam::Vec2;

use super::collision::circles_collide;
use super::entity::{Dot, Seeker};
use super::state::{EndReason, GameEvent, SessionPhase, SessionRng};
use crate::config::{ChaseConfig, ConfigError, Speed};
use crate::consts::*;

/// Complete state of one chase play-through
#[derive(Debug, Clone)]
pub struct ChaseSession {
    config: ChaseConfig,
    pub phase: SessionPhase,
    pub score: i32,
    pub seekers: Vec<Seeker>,
    pub dots: Vec<Dot>,
    rng: SessionRng,
}

impl ChaseSession {
    /// Create an idle session; invalid configuration fails here rather
    /// than surfacing mid-game
    pub fn new(config: ChaseConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            phase: SessionPhase::Idle,
            score: 0,
            seekers: Vec::new(),
            dots: Vec::new(),
            rng: SessionRng::new(0),
        })
    }

    pub fn config(&self) -> &ChaseConfig {
        &self.config
    }

    /// Reset score and entity populations, then enter `Running`
    pub fn start(&mut self, seed: u64) {
        let (width, height) = (self.config.width, self.config.height);
        self.rng = SessionRng::new(seed);
        self.score = 0;
        self.seekers = (0..self.config.seeker_count)
            .map(|_| Seeker::spawn_on_edge(self.rng.rng(), width, height))
            .collect();
        self.dots = (0..self.config.dot_count)
            .map(|_| Dot::spawn_inset(self.rng.rng(), width, height))
            .collect();
        self.phase = SessionPhase::Running;
        log::info!("chase session started (seed {})", self.rng.seed());
    }

    /// Leave `Running` without reinitializing; entity state stays frozen
    pub fn stop(&mut self) {
        self.phase = SessionPhase::Idle;
    }

    /// Advance one tick given the latest external target position (or none)
    pub fn tick(&mut self, target: Option<Vec2>, events: &mut Vec<GameEvent>) {
        if !self.phase.is_running() {
            return;
        }
        // Missing input: seekers skip their seek update, nothing else
        // changes and no transition occurs
        let Some(target) = target else {
            return;
        };

        let (width, height) = (self.config.width, self.config.height);
        let multiplier = self.config.speed.multiplier();

        // 1. Movement
        for seeker in &mut self.seekers {
            seeker.seek(target, multiplier);
        }

        // 2. Target vs seekers: decrement and respawn on contact.
        //    Replacement happens in place so the pass stays index-stable.
        for i in 0..self.seekers.len() {
            let s = &self.seekers[i];
            if circles_collide(s.pos, s.radius, target, TARGET_RADIUS) {
                self.score -= 1;
                events.push(GameEvent::Bad);
                let fresh = Seeker::spawn_on_edge(self.rng.rng(), width, height);
                self.seekers[i] = fresh;
            }
        }

        // 3. Seeker vs seeker: overlapping pairs would clump, so one of the
        //    pair is replaced elsewhere. Indices are collected first and
        //    applied after the pass.
        let mut respawn: Vec<usize> = Vec::new();
        for i in 0..self.seekers.len() {
            if respawn.contains(&i) {
                continue;
            }
            for j in (i + 1)..self.seekers.len() {
                if respawn.contains(&j) {
                    continue;
                }
                let (a, b) = (&self.seekers[i], &self.seekers[j]);
                if circles_collide(a.pos, a.radius, b.pos, b.radius) {
                    respawn.push(j);
                }
            }
        }
        for j in respawn {
            let fresh = Seeker::spawn_on_edge(self.rng.rng(), width, height);
            self.seekers[j] = fresh;
        }

        // 4. Target vs dots: increment, respawn, check the victory
        //    threshold immediately after each increment
        for i in 0..self.dots.len() {
            let d = &self.dots[i];
            if circles_collide(d.pos, d.radius, target, TARGET_RADIUS) {
                self.score += 1;
                events.push(GameEvent::Good);
                let fresh = Dot::spawn_inset(self.rng.rng(), width, height);
                self.dots[i] = fresh;
                if self.score >= VICTORY_SCORE {
                    self.phase = SessionPhase::Ended(EndReason::Victory {
                        superfast: self.config.speed == Speed::Superfast,
                    });
                    events.push(GameEvent::Victory);
                    log::info!("chase session won at score {}", self.score);
                    break;
                }
            }
        }
    }
}
