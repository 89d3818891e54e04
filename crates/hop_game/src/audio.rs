//! Audio requests emitted by the simulation.
//!
//! The simulation never touches a sound device. It queues [`AudioCommand`]s
//! and the presentation layer drains and plays them after each tick.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Coin,
    Defeat,
    Hurt,
    ButtonClick,
}

impl SoundCue {
    /// Name of the sound asset backing this cue.
    pub fn asset_name(self) -> &'static str {
        match self {
            Self::Coin => "sfx_coin",
            Self::Defeat => "sfx_disappear",
            Self::Hurt => "sfx_hurt",
            Self::ButtonClick => "button_click",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AudioCommand {
    PlaySound(SoundCue),
    PlayMusic { track: String, volume: f32 },
    StopMusic,
}

/// Player-facing toggles from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSettings {
    pub music_on: bool,
    pub sfx_on: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            music_on: true,
            sfx_on: true,
        }
    }
}

/// Pending audio commands, gated by [`AudioSettings`]. Stopping music is never
/// gated so a terminal transition always silences the level.
#[derive(Debug, Default)]
pub struct AudioQueue {
    pub settings: AudioSettings,
    pending: Vec<AudioCommand>,
}

impl AudioQueue {
    pub fn play_sound(&mut self, cue: SoundCue) {
        if self.settings.sfx_on {
            self.pending.push(AudioCommand::PlaySound(cue));
        }
    }

    pub fn play_music(&mut self, track: &str, volume: f32) {
        if self.settings.music_on {
            self.pending.push(AudioCommand::PlayMusic {
                track: track.to_string(),
                volume,
            });
        }
    }

    pub fn stop_music(&mut self) {
        self.pending.push(AudioCommand::StopMusic);
    }

    pub fn drain(&mut self) -> Vec<AudioCommand> {
        std::mem::take(&mut self.pending)
    }
}
