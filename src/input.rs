//! Keyboard translation into game commands
//!
//! Only the five game commands and quit ever leave this module; every other
//! key is dropped here. Many terminals never report key releases, so a held
//! soft-drop key is treated as released once its auto-repeat stops arriving.

use crate::game::Command;
use crate::settings::Settings;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

/// Time after which we consider a key "released" if no repeat received
const KEY_TIMEOUT: Duration = Duration::from_millis(150);

/// What a key event means to the app loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Quit,
}

/// Key bindings configuration - supports multiple keys per action
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub move_left: Vec<KeyCode>,
    pub move_right: Vec<KeyCode>,
    pub rotate: Vec<KeyCode>,
    pub soft_drop: Vec<KeyCode>,
    pub quit: Vec<KeyCode>,
}

impl KeyBindings {
    /// Parse a key string into KeyCode; unknown names bind nothing
    fn parse_key(s: &str) -> Option<KeyCode> {
        let key = match s.to_lowercase().as_str() {
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "space" => KeyCode::Char(' '),
            "enter" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "esc" | "escape" => KeyCode::Esc,
            s => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };
        Some(key)
    }

    /// Parse a list of key strings into KeyCodes
    fn parse_keys(keys: &[String]) -> Vec<KeyCode> {
        keys.iter().filter_map(|s| Self::parse_key(s)).collect()
    }

    /// Create keybindings from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            move_left: Self::parse_keys(&settings.keys.move_left),
            move_right: Self::parse_keys(&settings.keys.move_right),
            rotate: Self::parse_keys(&settings.keys.rotate),
            soft_drop: Self::parse_keys(&settings.keys.soft_drop),
            quit: Self::parse_keys(&settings.keys.quit),
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Turns key events into commands and tracks the held soft-drop key
#[derive(Debug, Clone)]
pub struct InputHandler {
    bindings: KeyBindings,
    /// When the soft-drop key was last seen, while it is held
    soft_drop_seen: Option<Instant>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

impl InputHandler {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            soft_drop_seen: None,
        }
    }

    /// Create input handler from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(KeyBindings::from_settings(settings))
    }

    /// Translate one key event
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<Input> {
        match key.kind {
            KeyEventKind::Release => self.key_up(key),
            KeyEventKind::Press | KeyEventKind::Repeat => self.key_down(key, now),
        }
    }

    /// Handle a key press or auto-repeat
    pub fn key_down(&mut self, key: KeyEvent, now: Instant) -> Option<Input> {
        // Handle Ctrl+C for quit
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Input::Quit);
        }

        let code = normalize_key(key.code);
        let bindings = &self.bindings;

        if bindings.soft_drop.contains(&code) {
            // Repeats only refresh the timeout
            let first_press = self.soft_drop_seen.is_none();
            self.soft_drop_seen = Some(now);
            return first_press.then_some(Input::Command(Command::SoftDropStart));
        }

        if bindings.move_left.contains(&code) {
            Some(Input::Command(Command::MoveLeft))
        } else if bindings.move_right.contains(&code) {
            Some(Input::Command(Command::MoveRight))
        } else if bindings.rotate.contains(&code) {
            Some(Input::Command(Command::Rotate))
        } else if bindings.quit.contains(&code) {
            Some(Input::Quit)
        } else {
            None
        }
    }

    /// Handle a key release event (may never be called on some terminals)
    pub fn key_up(&mut self, key: KeyEvent) -> Option<Input> {
        let code = normalize_key(key.code);
        if self.bindings.soft_drop.contains(&code) && self.soft_drop_seen.take().is_some() {
            return Some(Input::Command(Command::SoftDropStop));
        }
        None
    }

    /// Release a soft drop whose key stopped repeating (call every frame)
    pub fn update(&mut self, now: Instant) -> Option<Input> {
        let last_seen = self.soft_drop_seen?;
        if now.duration_since(last_seen) > KEY_TIMEOUT {
            self.soft_drop_seen = None;
            return Some(Input::Command(Command::SoftDropStop));
        }
        None
    }

    pub fn soft_drop_held(&self) -> bool {
        self.soft_drop_seen.is_some()
    }
}

/// Normalize key codes for consistent handling
fn normalize_key(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
