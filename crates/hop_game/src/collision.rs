//! Contact rules between the player and the level.
//!
//! Platforms are one-way from above: only a falling body is caught, and it is
//! caught by the first overlapping platform in level order, not the nearest.
//! Single-layer layouts never overlap two platforms at different heights in
//! one tick, so first-match is exact for them.

use hop_core::Rect;

use crate::entities::Platform;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    /// Index into the platform list.
    pub platform: usize,
    /// World y the body's bottom edge snaps to.
    pub surface_y: f32,
}

/// First platform catching a body at `rect` moving with `velocity_y`.
pub fn find_ground(rect: &Rect, velocity_y: f32, platforms: &[Platform]) -> Option<GroundContact> {
    if velocity_y <= 0.0 {
        return None;
    }
    platforms
        .iter()
        .position(|p| rect.overlaps(&p.rect))
        .map(|index| GroundContact {
            platform: index,
            surface_y: platforms[index].rect.top(),
        })
}

/// Keep `rect` horizontally inside `[0, level_width]`.
pub fn clamp_to_level(rect: &mut Rect, level_width: f32) {
    if rect.left() < 0.0 {
        rect.x = 0.0;
    }
    if rect.right() > level_width {
        rect.x = level_width - rect.w;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyContact {
    Stomp,
    Hit,
}

/// Classify an overlapping player/enemy pair. A stomp needs the player to be
/// falling with its feet within `threshold` of the enemy's head.
pub fn classify_enemy_contact(
    player: &Rect,
    velocity_y: f32,
    enemy: &Rect,
    threshold: f32,
) -> EnemyContact {
    if velocity_y > 0.0 && (player.bottom() - enemy.top()).abs() < threshold {
        EnemyContact::Stomp
    } else {
        EnemyContact::Hit
    }
}
