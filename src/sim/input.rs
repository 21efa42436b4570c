//! Directional control input
//!
//! The input collaborator records key presses into an `InputState` as
//! events arrive. Once per step the caller takes a `DirectionalInput`
//! snapshot by value, so a step never sees a half-updated set of flags.

use serde::{Deserialize, Serialize};

/// Held directions for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionalInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionalInput {
    /// True when no direction is held
    pub fn is_idle(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }
}

/// A direction key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// Map a browser key name (`ArrowUp`, ...) or a plain direction name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "arrowup" | "up" => Some(Key::Up),
            "arrowdown" | "down" => Some(Key::Down),
            "arrowleft" | "left" => Some(Key::Left),
            "arrowright" | "right" => Some(Key::Right),
            _ => None,
        }
    }
}

/// Latched key state, updated on key-down/key-up events
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: DirectionalInput,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    /// Copy of the currently held directions
    pub fn snapshot(&self) -> DirectionalInput {
        self.held
    }

    fn set(&mut self, key: Key, down: bool) {
        match key {
            Key::Up => self.held.up = down,
            Key::Down => self.held.down = down,
            Key::Left => self.held.left = down,
            Key::Right => self.held.right = down,
        }
    }
}
