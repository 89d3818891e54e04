//! Scripted input sequences.
//!
//! A replay describes raw device state per tick (held directions, jump key,
//! optional click). It is fed through [`InputState`] like live input, so jump
//! edges and click edges behave exactly as they would from a keyboard.

use glam::Vec2;
use hop_core::{InputState, Key, MouseBtn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct ReplaySequence {
    #[serde(default = "default_dt")]
    pub fixed_dt: f32,
    pub frames: Vec<ReplayFrame>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ReplayFrame {
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    /// Jump key held. Holding it across frames jumps once.
    #[serde(default)]
    pub jump: bool,
    /// Left click at this screen position on the first tick of the frame.
    #[serde(default)]
    pub click: Option<[f32; 2]>,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

/// Device state for one tick after expanding `repeat`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayTick {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub click: Option<Vec2>,
}

impl ReplayTick {
    /// Push this tick's device state into `input`. Call `input.end_frame()`
    /// after the tick has consumed it.
    pub fn apply(&self, input: &mut InputState) {
        input.set_key(Key::Left, self.left);
        input.set_key(Key::Right, self.right);
        input.set_key(Key::Space, self.jump);
        if let Some(pos) = self.click {
            input.mouse_down(MouseBtn::Left, pos);
            input.mouse_up(MouseBtn::Left);
        }
    }
}

impl ReplaySequence {
    pub fn expanded_ticks(&self) -> Vec<ReplayTick> {
        let mut out = Vec::new();
        for frame in &self.frames {
            for i in 0..frame.repeat.max(1) {
                out.push(ReplayTick {
                    left: frame.left,
                    right: frame.right,
                    jump: frame.jump,
                    click: if i == 0 {
                        frame.click.map(Vec2::from)
                    } else {
                        None
                    },
                });
            }
        }
        out
    }
}

pub fn load_replay_from_path(path: &Path) -> Result<ReplaySequence, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let replay: ReplaySequence = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse replay JSON {}: {e}", path.display()))?;
    validate_replay(&replay)?;
    Ok(replay)
}

fn validate_replay(replay: &ReplaySequence) -> Result<(), String> {
    if replay.fixed_dt <= 0.0 {
        return Err("Replay validation failed: fixed_dt must be > 0".to_string());
    }
    if replay.frames.is_empty() {
        return Err("Replay validation failed: frames list is empty".to_string());
    }
    Ok(())
}

const fn default_dt() -> f32 {
    1.0 / 60.0
}

const fn default_repeat() -> u32 {
    1
}
