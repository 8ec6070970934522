//! Input adapter contract
//!
//! Platform event handlers write into `InputState` whenever events arrive.
//! The game reads it once per frame through `snapshot` and `drain_clicks`,
//! so a key released halfway through a frame cannot affect that frame.

use glam::Vec2;

use crate::sim::TickInput;

/// Held actions the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Fire,
}

impl Action {
    /// Fixed keyboard mapping (`KeyboardEvent.code` values)
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Action::MoveLeft),
            "ArrowRight" => Some(Action::MoveRight),
            "Space" => Some(Action::Fire),
            _ => None,
        }
    }
}

/// Held-action set plus clicks waiting for the next frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: TickInput,
    pending_clicks: Vec<Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, action: Action, down: bool) {
        match action {
            Action::MoveLeft => self.held.left = down,
            Action::MoveRight => self.held.right = down,
            Action::Fire => self.held.fire = down,
        }
    }

    pub fn is_held(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.held.left,
            Action::MoveRight => self.held.right,
            Action::Fire => self.held.fire,
        }
    }

    /// Returns true if the key maps to an action
    pub fn key_down(&mut self, code: &str) -> bool {
        match Action::from_key_code(code) {
            Some(action) => {
                self.set(action, true);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        match Action::from_key_code(code) {
            Some(action) => {
                self.set(action, false);
                true
            }
            None => false,
        }
    }

    /// Drop every held action (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        self.held = TickInput::default();
    }

    /// Queue a click in viewport coordinates
    pub fn click(&mut self, point: Vec2) {
        self.pending_clicks.push(point);
    }

    /// Copy of the held actions for this frame
    pub fn snapshot(&self) -> TickInput {
        self.held
    }

    /// Take all clicks queued since the last frame, oldest first
    pub fn drain_clicks(&mut self) -> Vec<Vec2> {
        std::mem::take(&mut self.pending_clicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Action::from_key_code("ArrowLeft"), Some(Action::MoveLeft));
        assert_eq!(Action::from_key_code("ArrowRight"), Some(Action::MoveRight));
        assert_eq!(Action::from_key_code("Space"), Some(Action::Fire));
        assert_eq!(Action::from_key_code("KeyA"), None);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut input = InputState::new();
        assert!(input.key_down("ArrowLeft"));
        assert!(input.key_down("Space"));
        assert!(!input.key_down("KeyQ"));

        let snapshot = input.snapshot();
        input.key_up("ArrowLeft");

        assert!(snapshot.left);
        assert!(snapshot.fire);
        assert!(!input.is_held(Action::MoveLeft));
        assert!(input.is_held(Action::Fire));

        input.release_all();
        assert_eq!(input.snapshot(), TickInput::default());
    }

    #[test]
    fn test_drain_clicks() {
        let mut input = InputState::new();
        input.click(Vec2::new(1.0, 2.0));
        input.click(Vec2::new(3.0, 4.0));
        assert_eq!(
            input.drain_clicks(),
            vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]
        );
        assert!(input.drain_clicks().is_empty());
    }
}
