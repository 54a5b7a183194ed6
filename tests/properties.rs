//! Property tests for the simulation invariants

use std::collections::HashSet;

use glam::Vec2;
use proptest::prelude::*;

use arcade_loop::config::{BoundaryPolicy, SnakeConfig, Speed};
use arcade_loop::consts::{DOT_RADIUS, SEEKER_BASE_SPEED, SEEKER_RADIUS};
use arcade_loop::leaderboard::{Leaderboard, LeaderboardEntry, MemoryStore};
use arcade_loop::sim::{circles_collide, Direction, Dot, Seeker, SnakeSession};

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Route session log output through the test harness
fn init_test_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

proptest! {
    /// Two circles collide iff distance(centers) < r1 + r2, with the
    /// boundary case excluded. Integer-valued inputs keep the squared
    /// comparison exact in f32, so the predicate is checked against
    /// exact integer arithmetic.
    #[test]
    fn circle_collision_matches_distance_rule(
        ax in -1000i32..1000, ay in -1000i32..1000,
        bx in -1000i32..1000, by in -1000i32..1000,
        ra in 1i32..100, rb in 1i32..100,
    ) {
        let a = Vec2::new(ax as f32, ay as f32);
        let b = Vec2::new(bx as f32, by as f32);
        let dist_sq = (ax - bx).pow(2) as i64 + (ay - by).pow(2) as i64;
        let reach_sq = ((ra + rb) as i64).pow(2);

        prop_assert_eq!(
            circles_collide(a, ra as f32, b, rb as f32),
            dist_sq < reach_sq
        );
    }

    /// A respawned collectible is always fully inside the play-field
    #[test]
    fn dot_spawns_fully_inside_bounds(
        seed in any::<u64>(),
        width in 100.0f32..2000.0,
        height in 100.0f32..2000.0,
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let dot = Dot::spawn_inset(&mut rng, width, height);
        prop_assert!(dot.pos.x >= DOT_RADIUS && dot.pos.x <= width - DOT_RADIUS);
        prop_assert!(dot.pos.y >= DOT_RADIUS && dot.pos.y <= height - DOT_RADIUS);
    }

    /// Seeking never produces NaN and never overshoots the step length
    #[test]
    fn seek_is_finite_and_bounded(
        sx in -1000.0f32..1000.0, sy in -1000.0f32..1000.0,
        tx in -1000.0f32..1000.0, ty in -1000.0f32..1000.0,
        speed_idx in 0usize..4,
    ) {
        let speed = [Speed::Slow, Speed::Normal, Speed::Fast, Speed::Superfast][speed_idx];
        let start = Vec2::new(sx, sy);
        let target = Vec2::new(tx, ty);
        let mut seeker = Seeker {
            pos: start,
            radius: SEEKER_RADIUS,
            speed: SEEKER_BASE_SPEED,
        };

        seeker.seek(target, speed.multiplier());

        let step = SEEKER_BASE_SPEED * speed.multiplier();
        prop_assert!(seeker.pos.is_finite());
        prop_assert!(seeker.pos.distance(start) <= step + 1e-3);
        // When far enough away, every tick strictly closes the gap
        if start.distance(target) > step {
            prop_assert!(seeker.pos.distance(target) < start.distance(target));
        }
    }

    /// After any sequence of submissions the list reads descending
    #[test]
    fn leaderboard_always_sorted_descending(scores in prop::collection::vec(-5i32..500, 1..30)) {
        init_test_logs();
        let mut store = MemoryStore::default();
        let mut board = Leaderboard::new();
        for (i, score) in scores.iter().enumerate() {
            board.submit(
                LeaderboardEntry {
                    name: format!("p{i}"),
                    score: *score,
                    speed: Speed::Normal,
                    walls: false,
                },
                &mut store,
            );
        }
        let listed: Vec<i32> = board.entries().iter().map(|e| e.score).collect();
        prop_assert!(listed.windows(2).all(|w| w[0] >= w[1]));
        prop_assert_eq!(listed.len(), scores.len());
    }

    /// Under the wrap policy the head stays on the grid forever, the
    /// travel axis only ever changes orthogonally, and while the session
    /// runs the body never contains two cells with the same coordinates
    #[test]
    fn wrapped_snake_stays_in_bounds(
        seed in any::<u64>(),
        commands in prop::collection::vec(0u8..4, 1..60),
    ) {
        init_test_logs();
        let config = SnakeConfig {
            boundary: BoundaryPolicy::Wrap,
            ..SnakeConfig::default()
        };
        let mut session = SnakeSession::new(config).unwrap();
        session.start(seed);
        let mut events = Vec::new();

        for command in commands {
            let dir = match command {
                0 => Direction::Up,
                1 => Direction::Down,
                2 => Direction::Left,
                _ => Direction::Right,
            };
            let axis_before = session.direction().axis();
            session.steer(dir);
            if session.direction() != dir {
                // Rejected turns leave the axis untouched
                prop_assert_eq!(session.direction().axis(), axis_before);
            }
            session.tick(&mut events);
            if !session.phase.is_running() {
                break; // self-collision is a legal outcome here
            }
            prop_assert!(session.head.x >= 0 && session.head.x < 20);
            prop_assert!(session.head.y >= 0 && session.head.y < 20);
            let distinct: HashSet<_> = session.body().iter().collect();
            prop_assert_eq!(distinct.len(), session.body().len());
        }
    }
}
