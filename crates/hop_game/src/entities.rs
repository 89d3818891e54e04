//! Static level entities and the animation content they play.
//!
//! Platforms, coins and the goal are plain rectangles with an image. Enemies
//! embed an [`AnimationState`] by value; the clip data itself lives once in
//! [`AnimationLibrary`] and is passed in when an entity advances.

use glam::Vec2;
use hop_core::animation::{load_animation_set, AnimationSet, AnimationState, IDLE_CLIP};
use hop_core::Rect;
use std::path::Path;

pub const PLATFORM_IMAGE: &str = "terrain_grass_horizontal_middle";
pub const COIN_IMAGE: &str = "gem_yellow";
pub const GOAL_IMAGE: &str = "flag_yellow_a";

#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub rect: Rect,
    pub image: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub rect: Rect,
}

/// A stationary enemy. Its hitbox is anchored by the bottom-edge midpoint so
/// it stands on the floor of its grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    pub anim: AnimationState,
    pub image: String,
}

impl Enemy {
    pub fn new(midbottom: Vec2, size: Vec2, set: &AnimationSet) -> Self {
        let anim = AnimationState::new(IDLE_CLIP);
        let image = anim.current_image(set).to_string();
        Self {
            rect: Rect::from_midbottom(midbottom, size),
            anim,
            image,
        }
    }

    pub fn advance_animation(&mut self, dt: f32, set: &AnimationSet) {
        let image = self.anim.advance(dt, set);
        if self.image != image {
            self.image = image.to_string();
        }
    }
}

/// Animation sets for every animated entity kind.
#[derive(Debug, Clone)]
pub struct AnimationLibrary {
    pub player: AnimationSet,
    pub enemy: AnimationSet,
}

impl Default for AnimationLibrary {
    fn default() -> Self {
        Self {
            player: default_player_animations(),
            enemy: default_enemy_animations(),
        }
    }
}

impl AnimationLibrary {
    /// Load `player.json` and `frog.json` from `dir`, falling back to the
    /// compiled-in set for any file that is missing or invalid.
    pub fn load_or_default(dir: &Path) -> Self {
        Self {
            player: load_or_fallback(&dir.join("player.json"), default_player_animations),
            enemy: load_or_fallback(&dir.join("frog.json"), default_enemy_animations),
        }
    }
}

fn load_or_fallback(path: &Path, fallback: fn() -> AnimationSet) -> AnimationSet {
    if !path.exists() {
        log::warn!(
            "Animation set '{}' not found; using built-in clips.",
            path.display()
        );
        return fallback();
    }
    match load_animation_set(path) {
        Ok(set) => {
            log::info!("Loaded animation set '{}'", set.animation_id);
            set
        }
        Err(err) => {
            log::error!("{err}; using built-in clips.");
            fallback()
        }
    }
}

pub fn default_player_animations() -> AnimationSet {
    AnimationSet::from_clips(
        "player",
        0.15,
        &[
            ("idle", &["player_stand"]),
            ("run", &["player_walk_1", "player_walk_2"]),
            ("jump", &["player_jump"]),
        ],
    )
}

pub fn default_enemy_animations() -> AnimationSet {
    AnimationSet::from_clips(
        "frog",
        0.4,
        &[("idle", &["frog_idle", "frog_rest"]), ("jump", &["frog_jump"])],
    )
}
