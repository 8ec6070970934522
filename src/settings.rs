//! Host settings
//!
//! Gameplay constants are fixed; these only describe the surface and how the
//! host drives the simulation. Parsed from JSON, never persisted.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use crate::sim::MotionMode;

/// Host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Surface ===
    /// Viewport width in pixels (browser host uses the window size instead)
    pub viewport_width: f32,
    /// Viewport height in pixels
    pub viewport_height: f32,

    // === Simulation ===
    /// Frame-locked (source-faithful) or time-scaled movement
    pub motion: MotionMode,
    /// Fixed RNG seed; a time-based seed is used when absent
    pub seed: Option<u64>,

    // === Headless runner ===
    /// Frame cap for the native autopilot run
    pub max_frames: u64,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            motion: MotionMode::FrameLocked,
            seed: None,
            max_frames: 60 * 60 * 5,
            show_fps: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse settings, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Viewport, with non-positive dimensions replaced by the defaults
    pub fn viewport(&self) -> Vec2 {
        let width = if self.viewport_width > 0.0 {
            self.viewport_width
        } else {
            DEFAULT_VIEWPORT_WIDTH
        };
        let height = if self.viewport_height > 0.0 {
            self.viewport_height
        } else {
            DEFAULT_VIEWPORT_HEIGHT
        };
        Vec2::new(width, height)
    }

    /// Read settings from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Could not read {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
