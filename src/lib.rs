//! Shooter Game - a vertical arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, spawning, session state)
//! - `game`: Menu/Playing/GameOver controller and frame scheduler
//! - `ui`: Per-frame button regions and HUD text
//! - `input`: Held-action set and click queue fed by the platform
//! - `settings`: Host settings parsed from JSON
//! - `renderer`: Canvas 2D presentation (browser only)

pub mod game;
pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::{FrameView, Game};
pub use input::{Action, InputState};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 25.0;
    /// Horizontal movement per reference frame while a direction is held
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Distance from the bottom edge to the player's center
    pub const PLAYER_BOTTOM_OFFSET: f32 = 100.0;

    /// Projectile defaults
    pub const BULLET_SPEED: f32 = 10.0;
    pub const BULLET_WIDTH: f32 = 10.0;
    pub const BULLET_HEIGHT: f32 = 20.0;

    /// Enemy defaults (square side and descent per frame at level 1, difficulty 1)
    pub const ENEMY_SIZE: f32 = 40.0;
    pub const ENEMY_SPEED_BASE: f32 = 1.0;

    /// Timers (milliseconds of Playing time)
    pub const SHOOT_COOLDOWN_MS: f64 = 200.0;
    pub const ENEMY_SPAWN_INTERVAL_MS: f64 = 1000.0;
    pub const DIFFICULTY_INTERVAL_MS: f64 = 10_000.0;

    /// Session bookkeeping
    pub const START_LIVES: u8 = 3;
    pub const MAX_HEALTH: u8 = 5;
    pub const SCORE_PER_KILL: u32 = 10;

    /// Frame duration the per-tick movement amounts were tuned for (60 Hz)
    pub const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;
    /// Maximum frame delta accepted from the host to prevent fast-forwarding
    pub const MAX_FRAME_MS: f64 = 100.0;

    /// Viewport used when the host has no real surface
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 800.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 600.0;
}
