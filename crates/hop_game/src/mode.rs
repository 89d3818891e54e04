/// Top-level game mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    #[default]
    Menu,
    Playing,
    GameOver,
    Win,
}

/// Something that can move the game between modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeEvent {
    StartPressed,
    EnemyHit,
    FellOut,
    GoalReached,
    Dismissed,
}

impl GameMode {
    #[cfg(test)]
    pub const ALL: &'static [GameMode] = &[
        GameMode::Menu,
        GameMode::Playing,
        GameMode::GameOver,
        GameMode::Win,
    ];

    /// Transition table. `None` means the event is not valid in this mode.
    pub fn next(self, event: ModeEvent) -> Option<GameMode> {
        match (self, event) {
            (Self::Menu, ModeEvent::StartPressed) => Some(Self::Playing),
            (Self::Playing, ModeEvent::EnemyHit | ModeEvent::FellOut) => Some(Self::GameOver),
            (Self::Playing, ModeEvent::GoalReached) => Some(Self::Win),
            (Self::GameOver | Self::Win, ModeEvent::Dismissed) => Some(Self::Menu),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::GameOver | Self::Win)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Playing => "playing",
            Self::GameOver => "game_over",
            Self::Win => "win",
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
