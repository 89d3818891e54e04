//! Input state tracking with both edge-triggered and level-triggered queries.
//!
//! - **Level-triggered (held):** `is_held(key)` is true every tick the key is
//!   down. Walking uses this.
//!
//! - **Edge-triggered (just_pressed):** true only for the tick in which the
//!   transition happened. Jumping and menu clicks use this. Transient state is
//!   cleared by `end_frame()`, which the driver calls after the tick has
//!   consumed it, so events that arrive between ticks are never lost.

use glam::Vec2;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseBtn {
    Left,
    Right,
}

/// Per-tick gameplay input derived from [`InputState`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub jump_pressed: bool,
}

#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<Key>,
    just_pressed: HashSet<Key>,

    mouse_held: HashSet<MouseBtn>,
    mouse_just_pressed: HashSet<MouseBtn>,

    pub mouse_position: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        if self.held.insert(key) {
            self.just_pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Drive a key from a level signal: press on rising edge, release on falling.
    pub fn set_key(&mut self, key: Key, down: bool) {
        if down {
            self.key_down(key);
        } else {
            self.key_up(key);
        }
    }

    pub fn mouse_down(&mut self, btn: MouseBtn, position: Vec2) {
        self.mouse_position = position;
        if self.mouse_held.insert(btn) {
            self.mouse_just_pressed.insert(btn);
        }
    }

    pub fn mouse_up(&mut self, btn: MouseBtn) {
        self.mouse_held.remove(&btn);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn is_just_pressed(&self, key: Key) -> bool {
        self.just_pressed.contains(&key)
    }

    pub fn is_mouse_just_pressed(&self, btn: MouseBtn) -> bool {
        self.mouse_just_pressed.contains(&btn)
    }

    /// Screen position of a left click that happened since the last tick.
    pub fn click(&self) -> Option<Vec2> {
        self.is_mouse_just_pressed(MouseBtn::Left)
            .then_some(self.mouse_position)
    }

    pub fn frame_input(&self) -> FrameInput {
        FrameInput {
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
            jump_pressed: self.is_just_pressed(Key::Space),
        }
    }

    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.mouse_just_pressed.clear();
    }
}
