//! Keyboard input handling

use game_core::{InputState, PaddleInput};

use crate::fsm::{AppAction, AppState};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    ArrowUp,
    ArrowDown,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Escape,
}

impl Key {
    /// Parse a key name as reported by the input backend
    pub fn from_name(name: &str) -> Option<Key> {
        match name {
            "w" | "W" => Some(Key::W),
            "s" | "S" => Some(Key::S),
            "ArrowUp" | "Up" => Some(Key::ArrowUp),
            "ArrowDown" | "Down" => Some(Key::ArrowDown),
            "1" => Some(Key::Digit1),
            "2" => Some(Key::Digit2),
            "3" => Some(Key::Digit3),
            "4" => Some(Key::Digit4),
            "Escape" | "Esc" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// One thing the input backend reported since the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Window closed
    Quit,
}

/// Paddle keys currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub w: bool,
    pub s: bool,
    pub up: bool,
    pub down: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event
    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    /// Handle key up event
    pub fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::W => self.w = held,
            Key::S => self.s = held,
            Key::ArrowUp => self.up = held,
            Key::ArrowDown => self.down = held,
            _ => {}
        }
    }

    /// W/S drive the left paddle, the arrows drive the right one
    pub fn paddle_input(&self) -> InputState {
        InputState {
            left: PaddleInput::new(self.w, self.s),
            right: PaddleInput::new(self.up, self.down),
        }
    }
}

/// Screen action bound to a key press in the given state
pub fn menu_action(state: AppState, key: Key) -> Option<AppAction> {
    match (state, key) {
        (AppState::Menu, Key::Digit1) => Some(AppAction::PlayVsAi),
        (AppState::Menu, Key::Digit2) => Some(AppAction::PlayVsPlayer),
        (AppState::Menu, Key::Digit3) => Some(AppAction::ShowLeaderboard),
        (AppState::Menu, Key::Digit4) => Some(AppAction::Quit),
        (AppState::Leaderboard, Key::Escape) => Some(AppAction::Back),
        (AppState::Playing, Key::Escape) => Some(AppAction::Back),
        _ => None,
    }
}
