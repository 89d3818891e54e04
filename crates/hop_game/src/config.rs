//! Tunable game constants.
//!
//! Every field has a compiled-in default, so a config file only needs to name
//! the values it overrides. Physics values are per tick, not per second: the
//! simulation runs one step per frame and the animation clock is the only
//! consumer of `dt`.

use glam::Vec2;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    pub viewport_width: f32,
    pub viewport_height: f32,

    pub tile_size: f32,
    pub gravity: f32,
    pub jump_force: f32,
    pub player_speed: f32,
    pub player_start: [f32; 2],

    pub coin_reward: u32,
    pub stomp_reward: u32,
    pub stomp_bounce: f32,
    pub stomp_threshold: f32,

    pub camera_smoothing: f32,

    pub player_size: [f32; 2],
    pub enemy_size: [f32; 2],
    pub coin_size: [f32; 2],
    pub goal_size: [f32; 2],

    pub menu_button_size: [f32; 2],
    pub menu_button_tops: [f32; 4],

    pub music_track: String,
    pub music_volume: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Hopper".to_string(),
            viewport_width: 800.0,
            viewport_height: 600.0,
            tile_size: 70.0,
            gravity: 0.6,
            jump_force: -16.0,
            player_speed: 4.0,
            player_start: [100.0, 700.0],
            coin_reward: 10,
            stomp_reward: 50,
            stomp_bounce: -7.0,
            stomp_threshold: 15.0,
            camera_smoothing: 0.1,
            player_size: [64.0, 64.0],
            enemy_size: [56.0, 32.0],
            coin_size: [64.0, 64.0],
            goal_size: [64.0, 64.0],
            menu_button_size: [240.0, 50.0],
            menu_button_tops: [220.0, 290.0, 360.0, 430.0],
            music_track: "background_music".to_string(),
            music_volume: 0.3,
        }
    }
}

impl GameConfig {
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    pub fn player_start(&self) -> Vec2 {
        Vec2::from(self.player_start)
    }

    pub fn player_size(&self) -> Vec2 {
        Vec2::from(self.player_size)
    }

    pub fn enemy_size(&self) -> Vec2 {
        Vec2::from(self.enemy_size)
    }

    pub fn coin_size(&self) -> Vec2 {
        Vec2::from(self.coin_size)
    }

    pub fn goal_size(&self) -> Vec2 {
        Vec2::from(self.goal_size)
    }
}

pub fn load_config_from_path(path: &Path) -> Result<GameConfig, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let config: GameConfig = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse config JSON {}: {e}", path.display()))?;
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &GameConfig) -> Result<(), String> {
    if config.viewport_width <= 0.0 || config.viewport_height <= 0.0 {
        return Err("Config validation failed: viewport size must be > 0".to_string());
    }
    if config.tile_size <= 0.0 {
        return Err("Config validation failed: tile_size must be > 0".to_string());
    }
    if config.gravity <= 0.0 {
        return Err("Config validation failed: gravity must be > 0 (y grows downward)".to_string());
    }
    if config.jump_force >= 0.0 {
        return Err("Config validation failed: jump_force must be < 0".to_string());
    }
    if config.player_speed < 0.0 {
        return Err("Config validation failed: player_speed must be >= 0".to_string());
    }
    if config.stomp_threshold <= 0.0 {
        return Err("Config validation failed: stomp_threshold must be > 0".to_string());
    }
    if !(config.camera_smoothing > 0.0 && config.camera_smoothing <= 1.0) {
        return Err("Config validation failed: camera_smoothing must be in (0, 1]".to_string());
    }
    let sizes = [
        ("player_size", config.player_size),
        ("enemy_size", config.enemy_size),
        ("coin_size", config.coin_size),
        ("goal_size", config.goal_size),
        ("menu_button_size", config.menu_button_size),
    ];
    for (name, [w, h]) in sizes {
        if w <= 0.0 || h <= 0.0 {
            return Err(format!("Config validation failed: {name} must be > 0"));
        }
    }
    if !(0.0..=1.0).contains(&config.music_volume) {
        return Err("Config validation failed: music_volume must be in [0, 1]".to_string());
    }
    Ok(())
}
