//! Screen-space draw list for the current session.
//!
//! The list is rebuilt from scratch every frame and is the whole contract with
//! whatever backend puts pixels on screen: images positioned by their top-left
//! corner, filled rectangles and text. World entities are shifted by the camera
//! offset here, so backends never see world coordinates.

use glam::Vec2;
use hop_core::Rect;

use crate::entities::{COIN_IMAGE, GOAL_IMAGE};
use crate::menu::MenuButton;
use crate::mode::GameMode;
use crate::session::{on_off, Session};

pub const BACKGROUND_IMAGE: &str = "background";
const HUD_POSITION: Vec2 = Vec2::new(20.0, 20.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextAnchor {
    TopLeft(Vec2),
    Center(Vec2),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Image {
        image: String,
        top_left: Vec2,
        flip_x: bool,
    },
    FilledRect {
        rect: Rect,
        color: &'static str,
    },
    Text {
        text: String,
        anchor: TextAnchor,
        font_size: f32,
    },
}

fn image(name: &str, top_left: Vec2) -> DrawCommand {
    DrawCommand::Image {
        image: name.to_string(),
        top_left,
        flip_x: false,
    }
}

fn text(text: impl Into<String>, anchor: TextAnchor, font_size: f32) -> DrawCommand {
    DrawCommand::Text {
        text: text.into(),
        anchor,
        font_size,
    }
}

pub fn build_draw_list(session: &Session) -> Vec<DrawCommand> {
    let mut out = vec![image(BACKGROUND_IMAGE, Vec2::ZERO)];
    match session.mode {
        GameMode::Menu => push_menu(session, &mut out),
        GameMode::Playing => push_world(session, &mut out),
        GameMode::GameOver | GameMode::Win => push_end_screen(session, &mut out),
    }
    log::trace!("Draw list for {}: {} commands", session.mode, out.len());
    out
}

fn push_menu(session: &Session, out: &mut Vec<DrawCommand>) {
    let center_x = session.config.viewport_width * 0.5;
    out.push(text(
        session.config.title.as_str(),
        TextAnchor::Center(Vec2::new(center_x, 150.0)),
        70.0,
    ));
    let settings = session.audio.settings;
    for (button, rect) in session.menu().buttons() {
        let label = match button {
            MenuButton::Start => "Start Game".to_string(),
            MenuButton::Music => format!("Music: {}", on_off(settings.music_on)),
            MenuButton::Sfx => format!("SFX: {}", on_off(settings.sfx_on)),
            MenuButton::Exit => "Exit".to_string(),
        };
        out.push(DrawCommand::FilledRect {
            rect,
            color: button.color(),
        });
        out.push(text(label, TextAnchor::Center(rect.center()), 40.0));
    }
}

fn push_world(session: &Session, out: &mut Vec<DrawCommand>) {
    let camera = &session.camera;
    let at = |rect: &Rect| camera.world_to_screen(Vec2::new(rect.x, rect.y));

    for platform in &session.platforms {
        out.push(image(platform.image, at(&platform.rect)));
    }
    for coin in &session.coins {
        out.push(image(COIN_IMAGE, at(&coin.rect)));
    }
    for enemy in &session.enemies {
        out.push(image(&enemy.image, at(&enemy.rect)));
    }
    if let Some(goal) = &session.goal {
        out.push(image(GOAL_IMAGE, at(&goal.rect)));
    }
    if let Some(player) = &session.player {
        out.push(DrawCommand::Image {
            image: player.image.clone(),
            top_left: at(&player.rect),
            flip_x: player.facing_left,
        });
    }
    out.push(text(
        format!("SCORE: {}", session.score),
        TextAnchor::TopLeft(HUD_POSITION),
        40.0,
    ));
}

fn push_end_screen(session: &Session, out: &mut Vec<DrawCommand>) {
    let center = session.config.viewport() * 0.5;
    let message = if session.mode == GameMode::Win {
        "YOU WIN!"
    } else {
        "GAME OVER"
    };
    out.push(text(message, TextAnchor::Center(center), 100.0));
    if session.mode == GameMode::Win {
        out.push(text(
            format!("Final Score: {}", session.score),
            TextAnchor::Center(center + Vec2::new(0.0, 70.0)),
            50.0,
        ));
    }
    out.push(text(
        "Click to return to menu",
        TextAnchor::Center(center + Vec2::new(0.0, 120.0)),
        40.0,
    ));
}
