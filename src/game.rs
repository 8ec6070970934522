//! Game controller
//!
//! Owns the session and drives one frame at a time:
//! clicks -> input snapshot -> tick (Playing only) -> rebuild button regions.
//! The presentation layer reads `view()` between frames and never mutates.

use glam::Vec2;
use serde::Serialize;

use crate::input::InputState;
use crate::settings::Settings;
use crate::sim::{
    Enemy, FrameClock, GamePhase, GameSession, Player, Projectile, autopilot, tick,
};
use crate::ui::{self, Button, ButtonIntent};

/// Read-only snapshot handed to the renderer
#[derive(Debug, Serialize)]
pub struct FrameView<'a> {
    pub phase: GamePhase,
    pub viewport: Vec2,
    pub score: u32,
    pub lives: u8,
    pub health: u8,
    pub difficulty: u32,
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub projectiles: &'a [Projectile],
    pub buttons: &'a [Button],
    pub hud: Vec<String>,
    pub title: Vec<String>,
}

/// Menu/Playing/GameOver state machine plus frame scheduling
#[derive(Debug, Clone)]
pub struct Game {
    pub session: GameSession,
    /// Regions registered by the last frame; clicks are tested against these
    buttons: Vec<Button>,
    frame_clock: FrameClock,
    /// Frames run since creation
    pub frames: u64,
    /// Replace held input with the demo controller
    pub autopilot: bool,
}

impl Game {
    pub fn new(session: GameSession) -> Self {
        let buttons = ui::layout(session.phase, session.viewport);
        Self {
            session,
            buttons,
            frame_clock: FrameClock::new(),
            frames: 0,
            autopilot: false,
        }
    }

    pub fn from_settings(settings: &Settings, seed: u64) -> Self {
        let session = GameSession::new(settings.viewport(), seed).with_motion(settings.motion);
        Self::new(session)
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Carry out a button intent. Intents that do not belong to the current
    /// phase are ignored.
    pub fn apply(&mut self, intent: ButtonIntent) -> bool {
        let applied = match (intent, self.session.phase) {
            (ButtonIntent::StartGame, GamePhase::Menu) => self.session.start(),
            (ButtonIntent::RestartGame, GamePhase::GameOver) => {
                self.session.reset();
                true
            }
            _ => false,
        };
        if !applied {
            log::warn!(
                "{:?} ignored in {} phase",
                intent,
                self.session.phase.as_str()
            );
        }
        applied
    }

    /// Dispatch a click against the registered regions
    pub fn click(&mut self, point: Vec2) -> Option<ButtonIntent> {
        let intent = ui::hit_test(&self.buttons, point)?;
        self.apply(intent);
        Some(intent)
    }

    /// Run one frame at host time `now_ms`
    pub fn frame(&mut self, input: &mut InputState, now_ms: f64) {
        let dt = self.frame_clock.delta(now_ms);
        self.step(input, dt);
    }

    /// Run one frame with an explicit delta
    pub fn step(&mut self, input: &mut InputState, dt_ms: f64) {
        for point in input.drain_clicks() {
            self.click(point);
        }

        if self.session.is_playing() {
            let held = if self.autopilot {
                autopilot(&self.session)
            } else {
                input.snapshot()
            };
            tick(&mut self.session, &held, dt_ms);
        }

        // Stale regions from the previous frame never survive
        self.buttons = ui::layout(self.session.phase, self.session.viewport);
        self.frames += 1;
    }

    pub fn view(&self) -> FrameView<'_> {
        let s = &self.session;
        FrameView {
            phase: s.phase,
            viewport: s.viewport,
            score: s.score,
            lives: s.lives,
            health: s.health,
            difficulty: s.difficulty,
            player: &s.player,
            enemies: &s.enemies,
            projectiles: &s.projectiles,
            buttons: &self.buttons,
            hud: ui::hud_lines(s),
            title: ui::title_lines(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_HEALTH, REFERENCE_FRAME_MS, START_LIVES};
    use crate::sim::EnemyLevel;

    const DT: f64 = REFERENCE_FRAME_MS;

    fn game() -> Game {
        Game::new(GameSession::new(Vec2::new(800.0, 600.0), 4242))
    }

    fn center(button: &Button) -> Vec2 {
        Vec2::new(button.x + button.width / 2.0, button.y + button.height / 2.0)
    }

    fn play(game: &mut Game, input: &mut InputState) {
        let point = center(&game.buttons()[0]);
        input.click(point);
        game.step(input, DT);
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    /// Drive the session into GameOver through real collisions
    fn lose(game: &mut Game, input: &mut InputState) {
        game.session.lives = 1;
        game.session.health = 1;
        let at = game.session.player.pos + Vec2::new(-20.0, -30.0);
        game.session.enemies.push(Enemy::new(at, EnemyLevel::One));
        game.step(input, DT);
        assert_eq!(game.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_menu_does_not_simulate() {
        let mut game = game();
        let mut input = InputState::new();
        input.key_down("ArrowLeft");
        for i in 0..120 {
            game.frame(&mut input, i as f64 * 16.0);
        }
        assert_eq!(game.phase(), GamePhase::Menu);
        assert_eq!(game.session.clock.now_ms(), 0.0);
        assert_eq!(game.session.player.pos.x, 400.0);
        assert!(game.session.enemies.is_empty());
        assert_eq!(game.frames, 120);
    }

    #[test]
    fn test_play_button_starts_session() {
        let mut game = game();
        let mut input = InputState::new();
        assert_eq!(game.buttons().len(), 1);

        play(&mut game, &mut input);
        assert!(game.buttons().is_empty());
        assert!(game.session.clock.now_ms() > 0.0);
    }

    #[test]
    fn test_click_outside_buttons_is_ignored() {
        let mut game = game();
        let mut input = InputState::new();
        input.click(Vec2::new(5.0, 5.0));
        game.step(&mut input, DT);
        assert_eq!(game.phase(), GamePhase::Menu);
    }

    #[test]
    fn test_stale_regions_are_not_clickable() {
        let mut game = game();
        let mut input = InputState::new();
        let play_point = center(&game.buttons()[0]);
        play(&mut game, &mut input);

        // The Play region was dropped when the frame rebuilt the layout
        assert_eq!(game.click(play_point), None);
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_restart_resets_to_menu() {
        let mut game = game();
        let mut input = InputState::new();
        play(&mut game, &mut input);
        game.session.score = 90;
        game.session.difficulty = 3;
        game.session.player.pos.x = 100.0;
        lose(&mut game, &mut input);

        assert_eq!(game.buttons().len(), 1);
        assert_eq!(game.buttons()[0].intent, ButtonIntent::RestartGame);

        let point = center(&game.buttons()[0]);
        input.click(point);
        game.step(&mut input, DT);

        assert_eq!(game.phase(), GamePhase::Menu);
        assert_eq!(game.session.score, 0);
        assert_eq!(game.session.lives, START_LIVES);
        assert_eq!(game.session.health, MAX_HEALTH);
        assert_eq!(game.session.difficulty, 1);
        assert!(game.session.enemies.is_empty());
        assert!(game.session.projectiles.is_empty());
        assert_eq!(game.session.player.pos.x, 400.0);
        assert_eq!(game.buttons()[0].intent, ButtonIntent::StartGame);
    }

    #[test]
    fn test_game_over_freezes_session() {
        let mut game = game();
        let mut input = InputState::new();
        play(&mut game, &mut input);
        lose(&mut game, &mut input);

        let clock = game.session.clock.now_ms();
        input.key_down("Space");
        for _ in 0..10 {
            game.step(&mut input, DT);
        }
        assert_eq!(game.session.clock.now_ms(), clock);
        assert!(game.session.projectiles.is_empty());
        assert_eq!(game.session.lives, 0);
    }

    #[test]
    fn test_intents_in_wrong_phase_are_ignored() {
        let mut game = game();
        assert!(!game.apply(ButtonIntent::RestartGame));
        assert_eq!(game.phase(), GamePhase::Menu);

        assert!(game.apply(ButtonIntent::StartGame));
        assert!(!game.apply(ButtonIntent::StartGame));
        assert!(!game.apply(ButtonIntent::RestartGame));
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_autopilot_plays() {
        let mut game = game();
        let mut input = InputState::new();
        game.autopilot = true;
        play(&mut game, &mut input);
        for _ in 0..600 {
            game.step(&mut input, DT);
        }
        assert!(game.session.stats.shots_fired > 0);
    }

    #[test]
    fn test_view_serializes() {
        let game = game();
        let view = game.view();
        assert_eq!(view.phase, GamePhase::Menu);
        assert_eq!(view.title, vec!["Shooter Game"]);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["buttons"][0]["label"], "Play");
        assert_eq!(json["lives"], 3);
    }
}
