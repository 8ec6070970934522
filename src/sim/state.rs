//! Game session and entity types
//!
//! Everything a frame needs lives in one `GameSession`; the presentation layer
//! only ever reads it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::{Clock, IntervalTimer};
use super::collision::Aabb;
use crate::consts::*;

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen with the Play button
    #[default]
    Menu,
    /// Simulation running
    Playing,
    /// Lives exhausted, Restart button shown
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Menu => "Menu",
            GamePhase::Playing => "Playing",
            GamePhase::GameOver => "GameOver",
        }
    }
}

/// How per-tick movement amounts relate to elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MotionMode {
    /// Fixed amount per tick, so motion speed follows the display refresh rate
    #[default]
    FrameLocked,
    /// Amounts scaled by `dt / REFERENCE_FRAME_MS`
    TimeScaled,
}

impl MotionMode {
    /// Multiplier applied to per-tick movement for a frame of `dt_ms`
    pub fn scale(&self, dt_ms: f64) -> f32 {
        match self {
            MotionMode::FrameLocked => 1.0,
            MotionMode::TimeScaled => (dt_ms.max(0.0) / REFERENCE_FRAME_MS) as f32,
        }
    }
}

/// Enemy strength. Plain data: speed and color come from the lookup below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyLevel {
    One,
    Two,
    Three,
}

impl EnemyLevel {
    pub const ALL: [EnemyLevel; 3] = [EnemyLevel::One, EnemyLevel::Two, EnemyLevel::Three];

    pub fn from_index(level: u8) -> Option<Self> {
        match level {
            1 => Some(EnemyLevel::One),
            2 => Some(EnemyLevel::Two),
            3 => Some(EnemyLevel::Three),
            _ => None,
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            EnemyLevel::One => 1,
            EnemyLevel::Two => 2,
            EnemyLevel::Three => 3,
        }
    }

    /// Descent speed multiplier
    pub fn speed_multiplier(&self) -> f32 {
        self.index() as f32
    }

    /// Display color (CSS)
    pub fn color(&self) -> &'static str {
        match self {
            EnemyLevel::One => "green",
            EnemyLevel::Two => "yellow",
            EnemyLevel::Three => "red",
        }
    }
}

/// The player's avatar. `y` is fixed once the session is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
}

impl Player {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            pos: Vec2::new(viewport.x / 2.0, viewport.y - PLAYER_BOTTOM_OFFSET),
            radius: PLAYER_RADIUS,
        }
    }

    /// Keep the avatar fully on screen
    pub fn clamp_to(&mut self, viewport_width: f32) {
        self.pos.x = self.pos.x.min(viewport_width - self.radius).max(self.radius);
    }

    /// Collision box, using the radius as half-extent
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(self.radius))
    }
}

/// A shot travelling upward. `pos` is the tip: horizontally centered, top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
}

impl Projectile {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    /// Drawn rectangle
    pub fn bounds(&self) -> Aabb {
        Aabb::from_corner(
            Vec2::new(self.pos.x - BULLET_WIDTH / 2.0, self.pos.y),
            Vec2::new(BULLET_WIDTH, BULLET_HEIGHT),
        )
    }
}

/// A descending square. `pos` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub level: EnemyLevel,
}

impl Enemy {
    pub fn new(pos: Vec2, level: EnemyLevel) -> Self {
        Self { pos, level }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_corner(self.pos, Vec2::splat(ENEMY_SIZE))
    }

    /// Descent per tick at the given difficulty
    pub fn speed(&self, difficulty: u32) -> f32 {
        ENEMY_SPEED_BASE * self.level.speed_multiplier() * difficulty as f32
    }
}

/// Counters that are not part of the HUD contract
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub time_ticks: u64,
    pub shots_fired: u32,
    pub spawned: u32,
    pub kills: u32,
    /// Enemies that left the bottom edge (no penalty)
    pub escaped: u32,
}

/// One play-through plus the entities it owns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub viewport: Vec2,
    pub motion: MotionMode,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u8,
    pub health: u8,
    pub difficulty: u32,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    /// Simulated Playing time
    pub clock: Clock,
    pub spawn_timer: IntervalTimer,
    pub difficulty_timer: IntervalTimer,
    /// Clock time of the last shot; `None` until the first shot
    pub last_shot_ms: Option<f64>,
    pub stats: SessionStats,
}

impl GameSession {
    /// Create a new session in the Menu phase
    pub fn new(viewport: Vec2, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            viewport,
            motion: MotionMode::default(),
            phase: GamePhase::Menu,
            score: 0,
            lives: START_LIVES,
            health: MAX_HEALTH,
            difficulty: 1,
            player: Player::new(viewport),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            clock: Clock::new(),
            spawn_timer: IntervalTimer::new(ENEMY_SPAWN_INTERVAL_MS),
            difficulty_timer: IntervalTimer::new(DIFFICULTY_INTERVAL_MS),
            last_shot_ms: None,
            stats: SessionStats::default(),
        }
    }

    pub fn with_motion(mut self, motion: MotionMode) -> Self {
        self.motion = motion;
        self
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    #[inline]
    pub fn player_bounds(&self) -> Aabb {
        self.player.bounds()
    }

    /// Menu -> Playing. Returns false if not in the menu.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Menu {
            return false;
        }
        self.phase = GamePhase::Playing;
        log::info!("Session started (seed {})", self.seed);
        true
    }

    /// Full restart back to the menu. The player keeps its row and is recentered.
    /// The RNG stream continues so consecutive sessions differ.
    pub fn reset(&mut self) {
        log::info!(
            "Session reset (final score {}, difficulty {})",
            self.score,
            self.difficulty
        );
        self.score = 0;
        self.lives = START_LIVES;
        self.health = MAX_HEALTH;
        self.difficulty = 1;
        self.projectiles.clear();
        self.enemies.clear();
        self.player.pos.x = self.viewport.x / 2.0;
        self.clock = Clock::new();
        self.spawn_timer.reset();
        self.difficulty_timer.reset();
        self.last_shot_ms = None;
        self.stats = SessionStats::default();
        self.phase = GamePhase::Menu;
    }

    /// Apply one enemy-player contact. A depleted health bar is immediately
    /// exchanged for a life, so health is never observed at zero.
    /// Returns true if this hit ended the game.
    pub fn apply_player_hit(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        if self.health > 0 {
            return false;
        }

        self.lives = self.lives.saturating_sub(1);
        self.health = MAX_HEALTH;
        log::debug!("Life lost, {} remaining", self.lives);

        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            log::info!("Game over (score {})", self.score);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Vec2 {
        Vec2::new(800.0, 600.0)
    }

    #[test]
    fn test_new_session_defaults() {
        let session = GameSession::new(viewport(), 1);
        assert_eq!(session.phase, GamePhase::Menu);
        assert_eq!(session.score, 0);
        assert_eq!(session.lives, 3);
        assert_eq!(session.health, 5);
        assert_eq!(session.difficulty, 1);
        assert_eq!(session.player.pos, Vec2::new(400.0, 500.0));
        assert!(session.enemies.is_empty());
        assert!(session.projectiles.is_empty());
    }

    #[test]
    fn test_start_only_from_menu() {
        let mut session = GameSession::new(viewport(), 1);
        assert!(session.start());
        assert_eq!(session.phase, GamePhase::Playing);
        assert!(!session.start());

        session.phase = GamePhase::GameOver;
        assert!(!session.start());
        assert_eq!(session.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_level_lookup_table() {
        assert_eq!(EnemyLevel::from_index(0), None);
        assert_eq!(EnemyLevel::from_index(4), None);
        for level in EnemyLevel::ALL {
            assert_eq!(EnemyLevel::from_index(level.index()), Some(level));
        }
        assert_eq!(EnemyLevel::One.color(), "green");
        assert_eq!(EnemyLevel::Two.color(), "yellow");
        assert_eq!(EnemyLevel::Three.color(), "red");
    }

    #[test]
    fn test_enemy_speed_scales_with_level_and_difficulty() {
        let enemy = Enemy::new(Vec2::ZERO, EnemyLevel::Three);
        assert_eq!(enemy.speed(2), ENEMY_SPEED_BASE * 3.0 * 2.0);
        let enemy = Enemy::new(Vec2::ZERO, EnemyLevel::One);
        assert_eq!(enemy.speed(1), ENEMY_SPEED_BASE);
    }

    #[test]
    fn test_player_hit_consumes_life_at_zero_health() {
        let mut session = GameSession::new(viewport(), 1);
        session.start();

        for _ in 0..4 {
            assert!(!session.apply_player_hit());
        }
        assert_eq!(session.health, 1);
        assert_eq!(session.lives, 3);

        assert!(!session.apply_player_hit());
        assert_eq!(session.health, MAX_HEALTH);
        assert_eq!(session.lives, 2);
    }

    #[test]
    fn test_last_life_ends_game() {
        let mut session = GameSession::new(viewport(), 1);
        session.start();
        session.lives = 1;
        session.health = 1;
        assert!(session.apply_player_hit());
        assert_eq!(session.lives, 0);
        assert_eq!(session.health, MAX_HEALTH);
        assert_eq!(session.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut session = GameSession::new(viewport(), 7);
        session.start();
        session.score = 120;
        session.lives = 0;
        session.health = 2;
        session.difficulty = 4;
        session.player.pos.x = 30.0;
        session.enemies.push(Enemy::new(Vec2::new(10.0, 10.0), EnemyLevel::Two));
        session.projectiles.push(Projectile::new(Vec2::new(10.0, 300.0)));
        session.clock.advance(42_000.0);
        session.last_shot_ms = Some(41_000.0);
        session.phase = GamePhase::GameOver;

        session.reset();

        assert_eq!(session.phase, GamePhase::Menu);
        assert_eq!(session.score, 0);
        assert_eq!(session.lives, 3);
        assert_eq!(session.health, 5);
        assert_eq!(session.difficulty, 1);
        assert!(session.enemies.is_empty());
        assert!(session.projectiles.is_empty());
        assert_eq!(session.player.pos, Vec2::new(400.0, 500.0));
        assert_eq!(session.clock.now_ms(), 0.0);
        assert_eq!(session.last_shot_ms, None);
    }

    #[test]
    fn test_clamp_player() {
        let mut player = Player::new(viewport());
        player.pos.x = -50.0;
        player.clamp_to(800.0);
        assert_eq!(player.pos.x, PLAYER_RADIUS);
        player.pos.x = 5000.0;
        player.clamp_to(800.0);
        assert_eq!(player.pos.x, 800.0 - PLAYER_RADIUS);
    }

    #[test]
    fn test_motion_scale() {
        assert_eq!(MotionMode::FrameLocked.scale(33.0), 1.0);
        let scaled = MotionMode::TimeScaled.scale(REFERENCE_FRAME_MS * 2.0);
        assert!((scaled - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_session_serializes() {
        let session = GameSession::new(viewport(), 3);
        let json = serde_json::to_string(&session).unwrap();
        let back: GameSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, 3);
        assert_eq!(back.phase, GamePhase::Menu);
    }
}
