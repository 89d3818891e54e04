//! Per-tick update of a playing session.
//!
//! Order within a tick is fixed: player physics, coin pickup, enemy contact,
//! goal, fall-out, camera. Terminal transitions go through the mode table, so
//! the first one reached in a tick wins and later ones are dropped.

use hop_core::FrameInput;

use crate::audio::SoundCue;
use crate::collision::{classify_enemy_contact, EnemyContact};
use crate::mode::{GameMode, ModeEvent};
use crate::session::Session;

/// Summary of what happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub coins_collected: u32,
    pub enemies_stomped: u32,
    pub ended: Option<GameMode>,
}

pub fn tick(session: &mut Session, input: FrameInput, dt: f32) -> TickReport {
    let mut report = TickReport::default();
    if session.mode != GameMode::Playing {
        return report;
    }
    let Some(mut player) = session.player.take() else {
        log::error!("Tick skipped: playing mode has no player");
        return report;
    };

    player.step(
        input,
        dt,
        &session.platforms,
        session.level_width,
        &session.animations.player,
    );

    // Coins: single compacting pass, so each coin can pay out once.
    let before = session.coins.len();
    session.coins.retain(|coin| !player.rect.overlaps(&coin.rect));
    report.coins_collected = (before - session.coins.len()) as u32;
    for _ in 0..report.coins_collected {
        session.score += session.config.coin_reward;
        session.audio.play_sound(SoundCue::Coin);
    }
    if report.coins_collected > 0 {
        log::debug!(
            "Collected {} coin(s), score {}",
            report.coins_collected,
            session.score
        );
    }

    // Enemies: every enemy animates; contacts are resolved in level order and
    // stop being resolved once the player has been hit.
    let threshold = session.config.stomp_threshold;
    let mut stomped = vec![false; session.enemies.len()];
    let mut hit = false;
    for (index, enemy) in session.enemies.iter_mut().enumerate() {
        enemy.advance_animation(dt, &session.animations.enemy);
        if hit || !player.rect.overlaps(&enemy.rect) {
            continue;
        }
        match classify_enemy_contact(&player.rect, player.velocity_y, &enemy.rect, threshold) {
            EnemyContact::Stomp => {
                stomped[index] = true;
                player.velocity_y = session.config.stomp_bounce;
            }
            EnemyContact::Hit => hit = true,
        }
    }
    let mut flags = stomped.iter();
    session
        .enemies
        .retain(|_| !flags.next().copied().unwrap_or(false));
    report.enemies_stomped = stomped.iter().filter(|s| **s).count() as u32;
    for _ in 0..report.enemies_stomped {
        session.score += session.config.stomp_reward;
        session.audio.play_sound(SoundCue::Defeat);
    }
    if report.enemies_stomped > 0 {
        log::debug!(
            "Stomped {} enemy(ies), score {}",
            report.enemies_stomped,
            session.score
        );
    }
    if hit && session.transition(ModeEvent::EnemyHit) {
        session.audio.play_sound(SoundCue::Hurt);
        session.audio.stop_music();
    }

    let reached_goal = session
        .goal
        .as_ref()
        .is_some_and(|goal| player.rect.overlaps(&goal.rect));
    if reached_goal && session.transition(ModeEvent::GoalReached) {
        session.audio.stop_music();
    }

    if player.rect.top() > session.level_height && session.transition(ModeEvent::FellOut) {
        session.audio.stop_music();
    }

    session
        .camera
        .follow(player.center(), session.level_size());

    session.player = Some(player);
    if session.mode.is_terminal() {
        report.ended = Some(session.mode);
    }
    report
}
