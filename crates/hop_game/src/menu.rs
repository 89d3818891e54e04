//! Main-menu button layout and hit-testing in screen coordinates.

use glam::Vec2;
use hop_core::Rect;

use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuButton {
    Start,
    Music,
    Sfx,
    Exit,
}

impl MenuButton {
    /// Top-to-bottom display order.
    pub const ALL: [MenuButton; 4] = [
        MenuButton::Start,
        MenuButton::Music,
        MenuButton::Sfx,
        MenuButton::Exit,
    ];

    pub fn color(self) -> &'static str {
        match self {
            Self::Start => "green",
            Self::Music => "orange",
            Self::Sfx => "cyan",
            Self::Exit => "red",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MenuLayout {
    buttons: [(MenuButton, Rect); 4],
}

impl MenuLayout {
    /// Buttons share one size, are centred horizontally in the viewport and
    /// stacked at the configured top edges.
    pub fn new(config: &GameConfig) -> Self {
        let [w, h] = config.menu_button_size;
        let x = config.viewport_width * 0.5 - w * 0.5;
        let tops = config.menu_button_tops;
        Self {
            buttons: [0, 1, 2, 3].map(|i| (MenuButton::ALL[i], Rect::new(x, tops[i], w, h))),
        }
    }

    pub fn rect(&self, button: MenuButton) -> Rect {
        // `buttons` is stored in declaration order.
        self.buttons[button as usize].1
    }

    pub fn buttons(&self) -> impl Iterator<Item = (MenuButton, Rect)> + '_ {
        self.buttons.iter().copied()
    }

    /// First button containing `point`, in display order.
    pub fn hit_test(&self, point: Vec2) -> Option<MenuButton> {
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains_point(point))
            .map(|(button, _)| *button)
    }
}
