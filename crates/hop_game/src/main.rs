//! Hopper: headless driver for the platformer simulation.
//!
//! The simulation core (session, frame controller, collision, camera) is
//! presentation-agnostic. This binary is the presentation adapter used for
//! automated runs: it feeds a scripted input replay through `InputState` one
//! fixed tick at a time, plays the queued audio commands by logging them, and
//! builds the draw list each tick the way a renderer would consume it.
//!
//! Per tick the order is:
//!   1. apply the replay's device state to `InputState`
//!   2. deliver a pending click to the session (menu / end-screen handling)
//!   3. `frame::tick` with the derived `FrameInput`
//!   4. drain audio, build the draw list, clear edge-triggered input

mod audio;
mod camera;
mod collision;
mod config;
mod controller;
mod entities;
mod frame;
mod level;
mod menu;
mod mode;
mod render;
mod replay;
mod session;

use std::path::{Path, PathBuf};

use hop_core::InputState;

use audio::AudioCommand;
use config::{load_config_from_path, GameConfig};
use entities::AnimationLibrary;
use level::{load_level_from_path, DEFAULT_LEVEL};
use mode::GameMode;
use replay::{load_replay_from_path, ReplaySequence};
use session::{ClickOutcome, Session};

const ANIMATION_DIR: &str = "assets/animations";
const DEFAULT_REPLAY_PATH: &str = "assets/replays/demo.json";

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    level: Option<PathBuf>,
    replay: Option<PathBuf>,
}

fn usage() -> String {
    "Usage: cargo run -p hop_game -- [--config <config.json>] [--level <level.txt>] [--replay <replay.json>]\nExample: cargo run -p hop_game -- --level assets/levels/level1.txt --replay assets/replays/demo.json".to_string()
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();
    while let Some(flag) = args.next() {
        let slot = match flag.as_str() {
            "--config" => &mut parsed.config,
            "--level" => &mut parsed.level,
            "--replay" => &mut parsed.replay,
            "-h" | "--help" => return Err(usage()),
            other => return Err(format!("Unknown argument '{other}'\n{}", usage())),
        };
        let value = args
            .next()
            .ok_or_else(|| format!("Missing value for '{flag}'\n{}", usage()))?;
        *slot = Some(PathBuf::from(value));
    }
    Ok(parsed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RunSummary {
    ticks: u64,
    mode: GameMode,
    score: u32,
    exited: bool,
    /// Size of the last frame's draw list.
    draw_commands: usize,
}

fn run_headless(session: &mut Session, replay: &ReplaySequence) -> RunSummary {
    let mut input = InputState::new();
    let mut summary = RunSummary {
        ticks: 0,
        mode: session.mode,
        score: session.score,
        exited: false,
        draw_commands: 0,
    };

    for step in replay.expanded_ticks() {
        step.apply(&mut input);
        if let Some(pos) = input.click() {
            if session.on_click(pos) == ClickOutcome::Exit {
                summary.exited = true;
                break;
            }
        }

        let report = frame::tick(session, input.frame_input(), replay.fixed_dt);
        if let Some(mode) = report.ended {
            log::info!("Run ended in {} with score {}", mode, session.score);
        }
        for command in session.drain_audio() {
            play_audio(&command);
        }
        let draw_list = render::build_draw_list(session);
        if draw_list.len() != summary.draw_commands {
            log::debug!(
                "Tick {}: {} draw commands in {}",
                summary.ticks,
                draw_list.len(),
                session.mode
            );
        }
        summary.draw_commands = draw_list.len();

        input.end_frame();
        summary.ticks += 1;
    }

    summary.mode = session.mode;
    summary.score = session.score;
    summary
}

fn play_audio(command: &AudioCommand) {
    match command {
        AudioCommand::PlaySound(cue) => log::info!("sound: {}", cue.asset_name()),
        AudioCommand::PlayMusic { track, volume } => {
            log::info!("music: play '{}' at volume {:.2}", track, volume)
        }
        AudioCommand::StopMusic => log::info!("music: stop"),
    }
}

fn load_level_rows(path: Option<&Path>) -> Result<Vec<String>, String> {
    match path {
        Some(path) => {
            let rows = load_level_from_path(path)?;
            log::info!("Loaded level '{}' ({} rows)", path.display(), rows.len());
            Ok(rows)
        }
        None => Ok(DEFAULT_LEVEL.iter().map(|r| r.to_string()).collect()),
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Hopper starting...");

    let args = parse_args(std::env::args().skip(1))?;
    let config = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => GameConfig::default(),
    };
    let level_rows = load_level_rows(args.level.as_deref())?;
    let animations = AnimationLibrary::load_or_default(Path::new(ANIMATION_DIR));
    let replay_path = args
        .replay
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REPLAY_PATH));
    let replay = load_replay_from_path(&replay_path)?;

    log::info!(
        "{}: {}x{} viewport, replay '{}' ({} frames)",
        config.title,
        config.viewport_width,
        config.viewport_height,
        replay_path.display(),
        replay.frames.len()
    );

    let mut session = Session::new(config, animations, level_rows);
    let summary = run_headless(&mut session, &replay);

    println!(
        "ticks={} mode={} score={} draw_commands={}{}",
        summary.ticks,
        summary.mode,
        summary.score,
        summary.draw_commands,
        if summary.exited { " (exit requested)" } else { "" }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu::MenuButton;
    use replay::ReplayFrame;

    fn args(list: &[&str]) -> Result<Args, String> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    fn default_session() -> Session {
        Session::new(
            GameConfig::default(),
            AnimationLibrary::default(),
            load_level_rows(None).expect("default level"),
        )
    }

    fn button(session: &Session, button: MenuButton) -> [f32; 2] {
        session.menu().rect(button).center().to_array()
    }

    #[test]
    fn parse_args_reads_flags() {
        let parsed = args(&["--level", "a.txt", "--replay", "r.json"]).expect("should parse");
        assert_eq!(parsed.level, Some(PathBuf::from("a.txt")));
        assert_eq!(parsed.replay, Some(PathBuf::from("r.json")));
        assert!(parsed.config.is_none());
    }

    #[test]
    fn parse_args_rejects_unknown_and_dangling() {
        assert!(args(&["--fast"]).expect_err("unknown").contains("Unknown argument"));
        assert!(args(&["--config"]).expect_err("dangling").contains("Missing value"));
    }

    #[test]
    fn headless_run_starts_and_plays() {
        let mut session = default_session();
        let replay = ReplaySequence {
            fixed_dt: 1.0 / 60.0,
            frames: vec![
                ReplayFrame {
                    click: Some(button(&session, MenuButton::Start)),
                    repeat: 90,
                    ..ReplayFrame::default()
                },
            ],
        };
        let summary = run_headless(&mut session, &replay);
        assert_eq!(summary.ticks, 90);
        assert!(!summary.exited);
        // The first frog sits under the spawn point and is stomped on landing.
        assert_eq!(summary.mode, GameMode::Playing);
        assert_eq!(summary.score, 50);
        // Background, 57 platforms, 8 coins, 2 frogs, goal, player, HUD.
        assert_eq!(summary.draw_commands, 71);
    }

    #[test]
    fn exit_button_stops_run() {
        let mut session = default_session();
        let replay = ReplaySequence {
            fixed_dt: 1.0 / 60.0,
            frames: vec![
                ReplayFrame {
                    repeat: 5,
                    ..ReplayFrame::default()
                },
                ReplayFrame {
                    click: Some(button(&session, MenuButton::Exit)),
                    ..ReplayFrame::default()
                },
                ReplayFrame {
                    repeat: 50,
                    ..ReplayFrame::default()
                },
            ],
        };
        let summary = run_headless(&mut session, &replay);
        assert!(summary.exited);
        assert_eq!(summary.ticks, 5);
        assert_eq!(summary.mode, GameMode::Menu);
        // Background, title, four buttons with labels.
        assert_eq!(summary.draw_commands, 10);
    }

    #[test]
    fn missing_level_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("hop_missing_level_{}.txt", std::process::id()));
        let err = load_level_rows(Some(&path)).expect_err("missing level should fail");
        assert!(err.contains("Failed to read"));
    }
}
