//! Enemy spawning and difficulty escalation
//!
//! Both run off `IntervalTimer`s polled against the session clock.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, EnemyLevel, GameSession};
use crate::consts::ENEMY_SIZE;

/// Spawn one enemy just above the top edge at a random column
pub fn spawn_enemy(session: &mut GameSession) {
    let level = EnemyLevel::ALL[session.rng.random_range(0..EnemyLevel::ALL.len())];
    let span = session.viewport.x - ENEMY_SIZE;
    let x = if span > 0.0 {
        session.rng.random_range(0.0..span)
    } else {
        0.0
    };
    session
        .enemies
        .push(Enemy::new(Vec2::new(x, -ENEMY_SIZE), level));
    session.stats.spawned += 1;
}

/// Poll the spawn and difficulty timers against the current clock
pub fn run_timers(session: &mut GameSession) {
    let now = session.clock.now_ms();

    for _ in 0..session.spawn_timer.poll(now) {
        spawn_enemy(session);
    }

    let steps = session.difficulty_timer.poll(now);
    if steps > 0 {
        session.difficulty += steps;
        log::debug!("Difficulty raised to {}", session.difficulty);
    }
}
