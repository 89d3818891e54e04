//! Level grid loader.
//!
//! A level is a list of equal-length text rows, one character per tile:
//!
//! | char | placement                                        |
//! |------|--------------------------------------------------|
//! | `P`  | platform filling the cell                        |
//! | `C`  | coin centred in the cell                         |
//! | `E`  | enemy centred horizontally, standing on the cell floor |
//! | `F`  | goal flag centred in the cell (last one wins)    |
//!
//! Anything else is empty space. Cell `(row, col)` maps to world
//! `(col * tile, row * tile)`; the level spans `columns * tile` by `rows * tile`
//! with the column count taken from the first row.

use glam::Vec2;
use hop_core::Rect;
use std::fs;
use std::path::Path;

use crate::config::GameConfig;
use crate::entities::{AnimationLibrary, Coin, Enemy, Goal, Platform, PLATFORM_IMAGE};

pub const DEFAULT_LEVEL: &[&str] = &[
    "                                ",
    "                                ",
    "          C F                   ",
    "         PPPPPP                 ",
    "                                ",
    "                      C C       ",
    "   C C               PPPPP      ",
    "  PPPPP             E           ",
    "              E    PPPPP        ",
    "             PPPP               ",
    " E       C   C   C              ",
    "PPPPPPPPPPPPPPPPPPPPPPPPPPPPPPPP",
];

/// Everything a grid describes, in world coordinates.
#[derive(Debug, Clone, Default)]
pub struct LevelLayout {
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    pub goal: Option<Goal>,
    pub width: f32,
    pub height: f32,
}

pub fn build_layout<S: AsRef<str>>(
    rows: &[S],
    config: &GameConfig,
    animations: &AnimationLibrary,
) -> LevelLayout {
    let tile = config.tile_size;
    let columns = rows.first().map_or(0, |r| r.as_ref().chars().count());
    let mut layout = LevelLayout {
        width: columns as f32 * tile,
        height: rows.len() as f32 * tile,
        ..LevelLayout::default()
    };

    for (row_index, row) in rows.iter().enumerate() {
        for (col_index, ch) in row.as_ref().chars().enumerate() {
            let x = col_index as f32 * tile;
            let y = row_index as f32 * tile;
            let cell_center = Vec2::new(x + tile * 0.5, y + tile * 0.5);
            match ch {
                'P' => layout.platforms.push(Platform {
                    rect: Rect::new(x, y, tile, tile),
                    image: PLATFORM_IMAGE,
                }),
                'C' => layout.coins.push(Coin {
                    rect: Rect::from_center(cell_center, config.coin_size()),
                }),
                'E' => layout.enemies.push(Enemy::new(
                    Vec2::new(x + tile * 0.5, y + tile),
                    config.enemy_size(),
                    &animations.enemy,
                )),
                'F' => {
                    layout.goal = Some(Goal {
                        rect: Rect::from_center(cell_center, config.goal_size()),
                    })
                }
                _ => {}
            }
        }
    }

    log::debug!(
        "Level built: {}x{} world units, {} platforms, {} coins, {} enemies, goal: {}",
        layout.width,
        layout.height,
        layout.platforms.len(),
        layout.coins.len(),
        layout.enemies.len(),
        layout.goal.is_some()
    );
    layout
}

/// Read a level grid from a text file, one row per line.
pub fn load_level_from_path(path: &Path) -> Result<Vec<String>, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let rows: Vec<String> = raw
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect();
    validate_level_rows(&rows).map_err(|e| format!("{e} ({})", path.display()))?;
    Ok(rows)
}

/// A grid must produce a level with positive extent on both axes.
pub fn validate_level_rows<S: AsRef<str>>(rows: &[S]) -> Result<(), String> {
    match rows.first() {
        None => Err("Level validation failed: grid has no rows".to_string()),
        Some(first) if first.as_ref().is_empty() => {
            Err("Level validation failed: first row is empty".to_string())
        }
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn build(rows: &[&str]) -> LevelLayout {
        build_layout(rows, &GameConfig::default(), &AnimationLibrary::default())
    }

    #[test]
    fn single_row_places_each_kind() {
        let layout = build(&["P C E F"]);

        assert_eq!(layout.platforms.len(), 1);
        assert_eq!(layout.platforms[0].rect, Rect::new(0.0, 0.0, 70.0, 70.0));

        assert_eq!(layout.coins.len(), 1);
        assert_eq!(layout.coins[0].rect.center(), Vec2::new(175.0, 35.0));

        assert_eq!(layout.enemies.len(), 1);
        let enemy = &layout.enemies[0].rect;
        assert!((enemy.center().x - 315.0).abs() < 1e-4);
        assert!((enemy.bottom() - 70.0).abs() < 1e-4);

        let goal = layout.goal.as_ref().expect("goal should be placed");
        assert_eq!(goal.rect.center(), Vec2::new(455.0, 35.0));

        assert!((layout.width - 7.0 * 70.0).abs() < f32::EPSILON);
        assert!((layout.height - 70.0).abs() < f32::EPSILON);
    }

    #[test]
    fn unknown_characters_are_empty() {
        let layout = build(&["x#?.p c"]);
        assert!(layout.platforms.is_empty());
        assert!(layout.coins.is_empty());
        assert!(layout.enemies.is_empty());
        assert!(layout.goal.is_none());
        assert!((layout.width - 7.0 * 70.0).abs() < f32::EPSILON);
    }

    #[test]
    fn rows_map_to_world_y() {
        let layout = build(&["   ", " P ", "PPP"]);
        assert_eq!(layout.platforms.len(), 4);
        assert_eq!(layout.platforms[0].rect, Rect::new(70.0, 70.0, 70.0, 70.0));
        assert!(layout
            .platforms
            .iter()
            .skip(1)
            .all(|p| (p.rect.y - 140.0).abs() < f32::EPSILON));
        assert!((layout.height - 210.0).abs() < f32::EPSILON);
    }

    #[test]
    fn later_flag_replaces_earlier_one() {
        let layout = build(&["F F"]);
        let goal = layout.goal.expect("goal should be placed");
        assert_eq!(goal.rect.center(), Vec2::new(175.0, 35.0));
    }

    #[test]
    fn default_level_dimensions() {
        let layout = build(DEFAULT_LEVEL);
        assert!((layout.width - 32.0 * 70.0).abs() < f32::EPSILON);
        assert!((layout.height - 840.0).abs() < f32::EPSILON);
        assert_eq!(layout.enemies.len(), 3);
        assert_eq!(layout.coins.len(), 8);
        assert!(layout.goal.is_some());
    }

    #[test]
    fn building_twice_is_identical() {
        let a = build(DEFAULT_LEVEL);
        let b = build(DEFAULT_LEVEL);
        assert_eq!(a.platforms, b.platforms);
        assert_eq!(a.coins, b.coins);
        assert_eq!(a.enemies, b.enemies);
        assert_eq!(a.goal, b.goal);
    }

    #[test]
    fn load_level_reads_rows() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "hop_level_test_{}_{}.txt",
            std::process::id(),
            nanos
        ));
        fs::write(&path, "  C \r\nPPPP\n").expect("write temp file");

        let rows = load_level_from_path(&path).expect("level should load");
        assert_eq!(rows, vec!["  C ".to_string(), "PPPP".to_string()]);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn empty_grid_is_rejected() {
        let rows: [&str; 0] = [];
        let err = validate_level_rows(&rows).expect_err("empty grid should fail");
        assert!(err.contains("no rows"));
    }
}
