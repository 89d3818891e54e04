//! Fixed-rate sprite flipbooks.
//!
//! An [`AnimationSet`] is shared, immutable content: named image sequences and
//! one frame interval. An [`AnimationState`] is the per-entity playback cursor
//! and is embedded by value in whatever entity owns it. Playback advances one
//! frame whenever the accumulated time reaches the interval, then the timer is
//! reset to zero, so the rate does not depend on the render frame rate.
//!
//! The JSON format stores `frame_interval_ms`; on load it is converted to
//! seconds for use with the simulation's `dt`.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Clip every set must provide; entities start on it.
pub const IDLE_CLIP: &str = "idle";

/// Named image sequences sharing a single frame interval.
#[derive(Debug, Clone)]
pub struct AnimationSet {
    pub animation_id: String,
    pub frame_interval: f32,
    clips: HashMap<String, Vec<String>>,
}

impl AnimationSet {
    /// Build a set from compiled-in content. Callers guarantee every clip is
    /// non-empty; file content goes through [`parse_animation_set`] instead.
    pub fn from_clips(animation_id: &str, frame_interval: f32, clips: &[(&str, &[&str])]) -> Self {
        let clips = clips
            .iter()
            .map(|(name, frames)| {
                (
                    name.to_string(),
                    frames.iter().map(|f| f.to_string()).collect(),
                )
            })
            .collect();
        Self {
            animation_id: animation_id.to_string(),
            frame_interval,
            clips,
        }
    }

    pub fn clip(&self, name: &str) -> Option<&[String]> {
        self.clips.get(name).map(Vec::as_slice)
    }

    pub fn has_clip(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }
}

/// Playback cursor into one clip of an [`AnimationSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    pub clip_name: String,
    pub frame_index: usize,
    pub timer: f32,
}

impl AnimationState {
    pub fn new(clip_name: &str) -> Self {
        Self {
            clip_name: clip_name.to_string(),
            frame_index: 0,
            timer: 0.0,
        }
    }

    /// Switch to `name`, restarting at frame 0. Re-selecting the active clip is
    /// a no-op so a clip chosen every tick keeps playing. Returns whether the
    /// clip changed; unknown names are ignored.
    pub fn set_animation(&mut self, name: &str, set: &AnimationSet) -> bool {
        if self.clip_name == name {
            return false;
        }
        if !set.has_clip(name) {
            log::warn!(
                "Animation set '{}' has no clip '{}'; keeping '{}'",
                set.animation_id,
                name,
                self.clip_name
            );
            return false;
        }
        self.clip_name = name.to_string();
        self.frame_index = 0;
        true
    }

    /// Accumulate `dt` seconds and step the frame once the interval is reached.
    /// Returns the image to display.
    pub fn advance<'a>(&mut self, dt: f32, set: &'a AnimationSet) -> &'a str {
        self.timer += dt;
        if self.timer >= set.frame_interval {
            self.timer = 0.0;
            if let Some(frames) = set.clip(&self.clip_name) {
                self.frame_index = (self.frame_index + 1) % frames.len().max(1);
            }
        }
        self.current_image(set)
    }

    pub fn current_image<'a>(&self, set: &'a AnimationSet) -> &'a str {
        set.clip(&self.clip_name)
            .and_then(|frames| frames.get(self.frame_index).or_else(|| frames.first()))
            .map(String::as_str)
            .unwrap_or("")
    }
}

// --- JSON deserialization types (private) ---

#[derive(Debug, Deserialize)]
struct AnimationSetJson {
    version: String,
    animation_id: String,
    frame_interval_ms: u64,
    animations: HashMap<String, Vec<String>>,
}

/// Parse an animation set from JSON text. `origin` names the source in errors.
pub fn parse_animation_set(raw: &str, origin: &str) -> Result<AnimationSet, String> {
    let json: AnimationSetJson = serde_json::from_str(raw)
        .map_err(|e| format!("Failed to parse animation set {origin}: {e}"))?;
    validate_animation_json(&json)?;
    Ok(AnimationSet {
        animation_id: json.animation_id,
        frame_interval: json.frame_interval_ms as f32 / 1000.0,
        clips: json.animations,
    })
}

/// Load an animation set definition from disk.
pub fn load_animation_set(path: &Path) -> Result<AnimationSet, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read animation set {}: {e}", path.display()))?;
    parse_animation_set(&raw, &path.display().to_string())
}

fn validate_animation_json(json: &AnimationSetJson) -> Result<(), String> {
    if json.version != "0.1" {
        return Err(format!(
            "Animation validation failed: unsupported version '{}'",
            json.version
        ));
    }
    if json.animation_id.is_empty() {
        return Err("Animation validation failed: animation_id is empty".to_string());
    }
    if json.frame_interval_ms == 0 {
        return Err("Animation validation failed: frame_interval_ms must be > 0".to_string());
    }
    if !json.animations.contains_key(IDLE_CLIP) {
        return Err(format!(
            "Animation validation failed: '{}' has no '{IDLE_CLIP}' clip",
            json.animation_id
        ));
    }
    for (name, frames) in &json.animations {
        if frames.is_empty() {
            return Err(format!(
                "Animation validation failed: clip '{}' has no frames",
                name
            ));
        }
        if let Some(i) = frames.iter().position(|f| f.is_empty()) {
            return Err(format!(
                "Animation validation failed: clip '{}' frame {} has empty image name",
                name, i
            ));
        }
    }
    Ok(())
}
