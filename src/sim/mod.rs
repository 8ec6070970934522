//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - Time only advances through `tick` deltas
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::{Clock, FrameClock, IntervalTimer};
pub use collision::Aabb;
pub use spawn::{run_timers, spawn_enemy};
pub use state::{Enemy, EnemyLevel, GamePhase, GameSession, MotionMode, Player, Projectile};
pub use tick::{TickInput, autopilot, tick};
