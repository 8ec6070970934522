//! Simulation tick
//!
//! Advances a Playing session by one frame. Step order matters:
//! move player, fire, advance projectiles, advance enemies, resolve
//! collisions, then run the spawn and difficulty timers.

use super::spawn::run_timers;
use super::state::{GamePhase, GameSession, Projectile};
use crate::consts::*;

/// Held actions sampled once at the start of a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Advance the session by one frame of `dt_ms` milliseconds.
///
/// The delta is clamped to `[0, MAX_FRAME_MS]` so a stalled host can never
/// release more than one frame's worth of spawns and difficulty steps.
pub fn tick(session: &mut GameSession, input: &TickInput, dt_ms: f64) {
    if session.phase != GamePhase::Playing {
        log::debug!("tick ignored in {} phase", session.phase.as_str());
        return;
    }

    let dt_ms = if dt_ms.is_finite() {
        dt_ms.clamp(0.0, MAX_FRAME_MS)
    } else {
        0.0
    };

    session.clock.advance(dt_ms);
    session.stats.time_ticks += 1;
    let now = session.clock.now_ms();
    let scale = session.motion.scale(dt_ms);

    // Deltas sum; holding both directions cancels out
    let mut dx = 0.0;
    if input.left {
        dx -= PLAYER_SPEED;
    }
    if input.right {
        dx += PLAYER_SPEED;
    }
    session.player.pos.x += dx * scale;
    session.player.clamp_to(session.viewport.x);

    if input.fire {
        try_fire(session, now);
    }

    let rise = BULLET_SPEED * scale;
    for projectile in &mut session.projectiles {
        projectile.pos.y -= rise;
    }
    session.projectiles.retain(|p| p.pos.y > -BULLET_HEIGHT);

    let difficulty = session.difficulty;
    for enemy in &mut session.enemies {
        enemy.pos.y += enemy.speed(difficulty) * scale;
    }
    let bottom = session.viewport.y;
    let before = session.enemies.len();
    session.enemies.retain(|e| e.pos.y < bottom);
    session.stats.escaped += (before - session.enemies.len()) as u32;

    resolve_collisions(session);
    if session.phase != GamePhase::Playing {
        return;
    }

    run_timers(session);
}

/// Spawn a projectile at the player if the cooldown has elapsed
fn try_fire(session: &mut GameSession, now: f64) {
    let ready = session
        .last_shot_ms
        .is_none_or(|last| now - last >= SHOOT_COOLDOWN_MS);
    if !ready {
        return;
    }
    session.projectiles.push(Projectile::new(session.player.pos));
    session.last_shot_ms = Some(now);
    session.stats.shots_fired += 1;
}

/// Enemy-vs-projectile, then enemy-vs-player.
///
/// Enemies are walked in reverse so removals never skip an element. Each enemy
/// is removed at most once: a projectile kill skips the player check.
fn resolve_collisions(session: &mut GameSession) {
    let player_box = session.player_bounds();

    for i in (0..session.enemies.len()).rev() {
        let enemy_box = session.enemies[i].bounds();

        let hit = session
            .projectiles
            .iter()
            .position(|p| enemy_box.contains_point(p.pos));
        if let Some(j) = hit {
            session.enemies.remove(i);
            session.projectiles.swap_remove(j);
            session.score += SCORE_PER_KILL;
            session.stats.kills += 1;
            continue;
        }

        if enemy_box.overlaps(&player_box) {
            session.enemies.remove(i);
            if session.apply_player_hit() {
                break;
            }
        }
    }
}

/// Demo controller: chase the lowest enemy and keep firing
pub fn autopilot(session: &GameSession) -> TickInput {
    let target = session
        .enemies
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|e| e.pos.x + ENEMY_SIZE / 2.0);

    let Some(target_x) = target else {
        return TickInput::default();
    };

    let x = session.player.pos.x;
    TickInput {
        left: x > target_x + PLAYER_SPEED,
        right: x < target_x - PLAYER_SPEED,
        fire: true,
    }
}
