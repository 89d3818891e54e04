//! The single mutable game session.
//!
//! Everything the frame controller reads or writes lives on [`Session`]:
//! the level collections, the player, score, camera, mode and the pending
//! audio. Input handlers (`on_click`) and the per-tick update
//! ([`crate::frame::tick`]) are the only mutation points, and the driver calls
//! them strictly one after another.

use glam::Vec2;

use crate::audio::{AudioCommand, AudioQueue, SoundCue};
use crate::camera::FollowCamera;
use crate::config::GameConfig;
use crate::controller::{ControllerConfig, Player};
use crate::entities::{AnimationLibrary, Coin, Enemy, Goal, Platform};
use crate::level::build_layout;
use crate::menu::{MenuButton, MenuLayout};
use crate::mode::{GameMode, ModeEvent};

/// What the driver should do after a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Continue,
    Exit,
}

pub struct Session {
    pub config: GameConfig,
    pub animations: AnimationLibrary,
    level_rows: Vec<String>,
    menu: MenuLayout,

    pub mode: GameMode,
    pub score: u32,
    pub camera: FollowCamera,
    pub level_width: f32,
    pub level_height: f32,

    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    pub goal: Option<Goal>,
    pub player: Option<Player>,

    pub audio: AudioQueue,
}

impl Session {
    pub fn new(config: GameConfig, animations: AnimationLibrary, level_rows: Vec<String>) -> Self {
        let menu = MenuLayout::new(&config);
        let camera = FollowCamera::new(config.viewport(), config.camera_smoothing);
        Self {
            config,
            animations,
            level_rows,
            menu,
            mode: GameMode::Menu,
            score: 0,
            camera,
            level_width: 0.0,
            level_height: 0.0,
            platforms: Vec::new(),
            coins: Vec::new(),
            enemies: Vec::new(),
            goal: None,
            player: None,
            audio: AudioQueue::default(),
        }
    }

    pub fn menu(&self) -> &MenuLayout {
        &self.menu
    }

    pub fn level_size(&self) -> Vec2 {
        Vec2::new(self.level_width, self.level_height)
    }

    /// Rebuild every level collection from the grid and zero the score.
    pub fn setup_level(&mut self) {
        let layout = build_layout(&self.level_rows, &self.config, &self.animations);
        self.level_width = layout.width;
        self.level_height = layout.height;
        self.platforms = layout.platforms;
        self.coins = layout.coins;
        self.enemies = layout.enemies;
        self.goal = layout.goal;
        self.score = 0;
    }

    /// Replace the player with a fresh one at the start position and put the
    /// camera back at the origin.
    pub fn spawn_player(&mut self) {
        self.player = Some(Player::new(
            self.config.player_start(),
            self.config.player_size(),
            ControllerConfig::from(&self.config),
            &self.animations.player,
        ));
        self.camera.reset();
    }

    /// Apply a mode event through the transition table. Returns whether the
    /// mode changed; events that are not valid in the current mode are dropped.
    pub fn transition(&mut self, event: ModeEvent) -> bool {
        match self.mode.next(event) {
            Some(next) => {
                log::info!("Mode {} -> {} ({:?})", self.mode, next, event);
                self.mode = next;
                true
            }
            None => {
                log::debug!("Ignoring {:?} in mode {}", event, self.mode);
                false
            }
        }
    }

    /// Build a fresh run and enter `Playing`. Only valid from the menu; in any
    /// other mode the current run is left untouched.
    pub fn start_game(&mut self) {
        if self.mode.next(ModeEvent::StartPressed).is_none() {
            log::debug!("Ignoring start request in mode {}", self.mode);
            return;
        }
        self.setup_level();
        self.spawn_player();
        if self.transition(ModeEvent::StartPressed) {
            let track = self.config.music_track.clone();
            self.audio.play_music(&track, self.config.music_volume);
        }
    }

    /// Handle a pointer click at `pos` (screen coordinates).
    pub fn on_click(&mut self, pos: Vec2) -> ClickOutcome {
        match self.mode {
            GameMode::Menu => match self.menu.hit_test(pos) {
                Some(MenuButton::Start) => self.start_game(),
                Some(MenuButton::Music) => {
                    self.audio.settings.music_on = !self.audio.settings.music_on;
                    log::info!("Music: {}", on_off(self.audio.settings.music_on));
                    self.audio.play_sound(SoundCue::ButtonClick);
                }
                Some(MenuButton::Sfx) => {
                    self.audio.settings.sfx_on = !self.audio.settings.sfx_on;
                    log::info!("SFX: {}", on_off(self.audio.settings.sfx_on));
                    self.audio.play_sound(SoundCue::ButtonClick);
                }
                Some(MenuButton::Exit) => {
                    log::info!("Exit requested from menu");
                    return ClickOutcome::Exit;
                }
                None => {}
            },
            GameMode::GameOver | GameMode::Win => {
                self.transition(ModeEvent::Dismissed);
            }
            GameMode::Playing => {}
        }
        ClickOutcome::Continue
    }

    pub fn drain_audio(&mut self) -> Vec<AudioCommand> {
        self.audio.drain()
    }
}

pub fn on_off(flag: bool) -> &'static str {
    if flag {
        "ON"
    } else {
        "OFF"
    }
}
