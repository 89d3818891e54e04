use glam::Vec2;
use hop_core::animation::{AnimationSet, AnimationState, IDLE_CLIP};
use hop_core::{FrameInput, Rect};

use crate::collision::{clamp_to_level, find_ground};
use crate::config::GameConfig;
use crate::entities::Platform;

/// Per-tick movement constants, copied out of [`GameConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    pub speed: f32,
    pub gravity: f32,
    pub jump_force: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}

impl From<&GameConfig> for ControllerConfig {
    fn from(config: &GameConfig) -> Self {
        Self {
            speed: config.player_speed,
            gravity: config.gravity,
            jump_force: config.jump_force,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub velocity_y: f32,
    pub is_on_ground: bool,
    pub facing_left: bool,
    pub anim: AnimationState,
    pub image: String,
    pub config: ControllerConfig,
}

impl Player {
    pub fn new(center: Vec2, size: Vec2, config: ControllerConfig, set: &AnimationSet) -> Self {
        let anim = AnimationState::new(IDLE_CLIP);
        let image = anim.current_image(set).to_string();
        Self {
            rect: Rect::from_center(center, size),
            velocity_y: 0.0,
            is_on_ground: false,
            facing_left: false,
            anim,
            image,
            config,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    /// Edge-triggered jump. Only legal while grounded; the velocity is picked
    /// up by the next integration step.
    pub fn try_jump(&mut self) -> bool {
        if !self.is_on_ground {
            return false;
        }
        self.velocity_y = self.config.jump_force;
        true
    }

    /// Advance one tick: walk, fall, land, clamp, then pick the animation.
    pub fn step(
        &mut self,
        input: FrameInput,
        dt: f32,
        platforms: &[Platform],
        level_width: f32,
        set: &AnimationSet,
    ) {
        if input.jump_pressed {
            self.try_jump();
        }

        // Both directions apply when both are held; they cancel out.
        let mut is_moving = false;
        if input.left {
            self.rect.x -= self.config.speed;
            self.facing_left = true;
            is_moving = true;
        }
        if input.right {
            self.rect.x += self.config.speed;
            self.facing_left = false;
            is_moving = true;
        }

        // Gravity applies while grounded too; landing is re-detected each tick.
        self.velocity_y += self.config.gravity;
        self.rect.y += self.velocity_y;

        let was_on_ground = self.is_on_ground;
        self.is_on_ground = false;
        if let Some(contact) = find_ground(&self.rect, self.velocity_y, platforms) {
            if !was_on_ground {
                log::debug!("Landed on platform {} at y={}", contact.platform, contact.surface_y);
            }
            self.rect.y = contact.surface_y - self.rect.h;
            self.velocity_y = 0.0;
            self.is_on_ground = true;
        }

        clamp_to_level(&mut self.rect, level_width);

        let clip = if !self.is_on_ground {
            "jump"
        } else if is_moving {
            "run"
        } else {
            IDLE_CLIP
        };
        self.anim.set_animation(clip, set);
        let image = self.anim.advance(dt, set);
        if self.image != image {
            self.image = image.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{default_player_animations, PLATFORM_IMAGE};

    const DT: f32 = 1.0 / 60.0;

    fn floor(width_tiles: usize) -> Vec<Platform> {
        (0..width_tiles)
            .map(|i| Platform {
                rect: Rect::new(i as f32 * 70.0, 770.0, 70.0, 70.0),
                image: PLATFORM_IMAGE,
            })
            .collect()
    }

    fn spawn(center: Vec2) -> Player {
        Player::new(
            center,
            Vec2::new(64.0, 64.0),
            ControllerConfig::default(),
            &default_player_animations(),
        )
    }

    fn idle() -> FrameInput {
        FrameInput::default()
    }

    fn settle(player: &mut Player, platforms: &[Platform]) {
        let set = default_player_animations();
        for _ in 0..120 {
            player.step(idle(), DT, platforms, 2240.0, &set);
        }
    }

    #[test]
    fn falls_and_lands_on_platform_top() {
        let platforms = floor(10);
        let mut player = spawn(Vec2::new(100.0, 700.0));
        settle(&mut player, &platforms);

        assert!(player.is_on_ground);
        assert!((player.rect.bottom() - 770.0).abs() < 1e-3);
        assert_eq!(player.velocity_y, 0.0);
        assert_eq!(player.anim.clip_name, "idle");
    }

    #[test]
    fn fresh_player_is_airborne() {
        let player = spawn(Vec2::new(100.0, 700.0));
        assert!(!player.is_on_ground);
        assert_eq!(player.velocity_y, 0.0);
    }

    #[test]
    fn grounded_status_holds_while_standing() {
        let platforms = floor(10);
        let set = default_player_animations();
        let mut player = spawn(Vec2::new(100.0, 700.0));
        settle(&mut player, &platforms);
        for _ in 0..30 {
            player.step(idle(), DT, &platforms, 2240.0, &set);
            assert!(player.is_on_ground);
        }
    }

    #[test]
    fn jump_only_when_grounded() {
        let mut player = spawn(Vec2::new(100.0, 100.0));
        assert!(!player.try_jump());
        assert_eq!(player.velocity_y, 0.0);

        player.is_on_ground = true;
        assert!(player.try_jump());
        assert!((player.velocity_y - (-16.0)).abs() < f32::EPSILON);
    }

    #[test]
    fn jump_lifts_player_off_ground() {
        let platforms = floor(10);
        let set = default_player_animations();
        let mut player = spawn(Vec2::new(100.0, 700.0));
        settle(&mut player, &platforms);
        let ground_y = player.rect.y;

        player.step(
            FrameInput {
                jump_pressed: true,
                ..idle()
            },
            DT,
            &platforms,
            2240.0,
            &set,
        );
        assert!(player.rect.y < ground_y);
        assert!(!player.is_on_ground);
        assert_eq!(player.anim.clip_name, "jump");

        // Airborne: pressing jump again has no effect.
        let vy = player.velocity_y;
        player.step(
            FrameInput {
                jump_pressed: true,
                ..idle()
            },
            DT,
            &platforms,
            2240.0,
            &set,
        );
        assert!((player.velocity_y - (vy + 0.6)).abs() < 1e-4);
    }

    #[test]
    fn walking_moves_and_faces() {
        let platforms = floor(10);
        let set = default_player_animations();
        let mut player = spawn(Vec2::new(300.0, 700.0));
        settle(&mut player, &platforms);
        let x0 = player.rect.x;

        player.step(FrameInput { left: true, ..idle() }, DT, &platforms, 2240.0, &set);
        assert!((player.rect.x - (x0 - 4.0)).abs() < 1e-4);
        assert!(player.facing_left);
        assert_eq!(player.anim.clip_name, "run");

        player.step(FrameInput { right: true, ..idle() }, DT, &platforms, 2240.0, &set);
        assert!((player.rect.x - x0).abs() < 1e-4);
        assert!(!player.facing_left);
    }

    #[test]
    fn both_directions_cancel_and_face_right() {
        let platforms = floor(10);
        let set = default_player_animations();
        let mut player = spawn(Vec2::new(300.0, 700.0));
        settle(&mut player, &platforms);
        let x0 = player.rect.x;

        player.step(
            FrameInput {
                left: true,
                right: true,
                jump_pressed: false,
            },
            DT,
            &platforms,
            2240.0,
            &set,
        );
        assert!((player.rect.x - x0).abs() < 1e-4);
        assert!(!player.facing_left);
        assert_eq!(player.anim.clip_name, "run");
    }

    #[test]
    fn walking_into_level_edge_clamps() {
        let platforms = floor(10);
        let set = default_player_animations();
        let mut player = spawn(Vec2::new(34.0, 700.0));
        for _ in 0..20 {
            player.step(FrameInput { left: true, ..idle() }, DT, &platforms, 700.0, &set);
            assert!(player.rect.left() >= 0.0);
        }
        assert!((player.rect.left() - 0.0).abs() < f32::EPSILON);

        let mut player = spawn(Vec2::new(660.0, 700.0));
        for _ in 0..20 {
            player.step(FrameInput { right: true, ..idle() }, DT, &platforms, 700.0, &set);
            assert!(player.rect.right() <= 700.0 + 1e-4);
        }
    }

    #[test]
    fn no_platform_means_free_fall() {
        let set = default_player_animations();
        let mut player = spawn(Vec2::new(100.0, 100.0));
        for _ in 0..10 {
            player.step(idle(), DT, &[], 2240.0, &set);
        }
        assert!(!player.is_on_ground);
        assert!((player.velocity_y - 6.0).abs() < 1e-4);
        assert_eq!(player.image, "player_jump");
    }

    #[test]
    fn deterministic_sequence_reaches_same_final_state() {
        let platforms = floor(30);
        let set = default_player_animations();
        let mut inputs = Vec::new();
        inputs.extend(std::iter::repeat(FrameInput { right: true, ..idle() }).take(60));
        inputs.push(FrameInput {
            right: true,
            left: false,
            jump_pressed: true,
        });
        inputs.extend(std::iter::repeat(FrameInput { right: true, ..idle() }).take(90));
        inputs.extend(std::iter::repeat(FrameInput { left: true, ..idle() }).take(45));

        let mut run_a = spawn(Vec2::new(100.0, 700.0));
        let mut run_b = spawn(Vec2::new(100.0, 700.0));
        for input in &inputs {
            run_a.step(*input, DT, &platforms, 2100.0, &set);
        }
        for input in &inputs {
            run_b.step(*input, DT, &platforms, 2100.0, &set);
        }

        assert_eq!(run_a.rect, run_b.rect);
        assert_eq!(run_a.velocity_y, run_b.velocity_y);
        assert_eq!(run_a.is_on_ground, run_b.is_on_ground);
        assert_eq!(run_a.anim, run_b.anim);
    }
}
