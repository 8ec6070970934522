//! Per-phase UI affordances
//!
//! Buttons are plain data: a region plus an intent from a closed set. The
//! controller rebuilds the list every frame and interprets intents itself,
//! so nothing executable is captured by the render pass.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Aabb, GamePhase, GameSession};

pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 50.0;

/// What a button asks the state machine to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonIntent {
    /// Menu -> Playing
    StartGame,
    /// GameOver -> Menu with a full session reset
    RestartGame,
}

/// A clickable region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    pub label: &'static str,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub intent: ButtonIntent,
}

impl Button {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_corner(Vec2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }

    /// Strict interior test; a click on the border misses
    pub fn contains(&self, point: Vec2) -> bool {
        self.bounds().contains_point(point)
    }
}

/// Buttons registered for `phase` in a viewport of the given size
pub fn layout(phase: GamePhase, viewport: Vec2) -> Vec<Button> {
    let x = viewport.x / 2.0 - BUTTON_WIDTH / 2.0;
    let mid = viewport.y / 2.0;
    match phase {
        GamePhase::Menu => vec![Button {
            label: "Play",
            x,
            y: mid,
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
            intent: ButtonIntent::StartGame,
        }],
        GamePhase::Playing => Vec::new(),
        GamePhase::GameOver => vec![Button {
            label: "Restart",
            x,
            y: mid + 50.0,
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
            intent: ButtonIntent::RestartGame,
        }],
    }
}

/// Intent of the first registered button containing `point`
pub fn hit_test(buttons: &[Button], point: Vec2) -> Option<ButtonIntent> {
    buttons.iter().find(|b| b.contains(point)).map(|b| b.intent)
}

/// HUD text while playing, top to bottom
pub fn hud_lines(session: &GameSession) -> Vec<String> {
    vec![
        format!("Score: {}", session.score),
        format!("Lives: {}", session.lives),
        format!("Health: {}", session.health),
        format!("Difficulty: {}", session.difficulty),
    ]
}

/// Centered title text for the non-playing screens
pub fn title_lines(session: &GameSession) -> Vec<String> {
    match session.phase {
        GamePhase::Menu => vec!["Shooter Game".to_string()],
        GamePhase::Playing => Vec::new(),
        GamePhase::GameOver => vec![
            "Game Over".to_string(),
            format!("Final Score: {}", session.score),
        ],
    }
}

/// Frames averaged by the FPS counter
const FPS_WINDOW: usize = 60;

/// Rolling FPS estimate over the last `FPS_WINDOW` frame timestamps
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at host time `time_ms` and return the current estimate
    pub fn record(&mut self, time_ms: f64) -> u32 {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time_ms - oldest_time;
            if elapsed > 0.0 {
                // The window holds FPS_WINDOW timestamps, so FPS_WINDOW - 1 intervals
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
        self.fps
    }

    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
