//! Fixed timestep simulation tick
//!
//! `tick` advances the game by exactly one 60 Hz frame. All motion
//! constants are in per-frame units, so there is no dt parameter: one
//! call is one frame.

use super::collision::{self, EnemyContact, PlatformContact};
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input sampled for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
    /// Jump key-down edge this frame (never held-key repeat)
    pub jump: bool,
    /// Restart key held; only honored in GameOver/Won
    pub restart: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Playing => step_playing(state, input),
        GamePhase::GameOver | GamePhase::Won => {
            // Terminal phases: restart is the only live control
            if input.restart {
                state.reset();
                log::info!("session restarted");
            }
        }
    }
}

/// What the enemy scan decided for this frame
enum EnemyOutcome {
    Defeated(usize),
    Hurt,
}

fn step_playing(state: &mut GameState, input: &TickInput) {
    // Jump only on the key-down edge while grounded
    if input.jump && state.player.on_ground {
        state.player.vel_y = JUMP_VELOCITY;
        state.player.on_ground = false;
    }

    // Horizontal movement, clamped so the square stays inside the window
    if input.left {
        state.player.pos.x -= PLAYER_SPEED;
    }
    if input.right {
        state.player.pos.x += PLAYER_SPEED;
    }
    state.player.pos.x = state.player.pos.x.clamp(0.0, WINDOW_WIDTH - PLAYER_SIZE);

    // Gravity accumulates without a terminal velocity cap
    let prev_top = state.player.pos.y;
    state.player.vel_y += GRAVITY;
    state.player.pos.y += state.player.vel_y;

    // Ground first, then platforms in list order. A resolved landing
    // zeroes vel_y and every later check requires nonzero velocity, so
    // resolutions cannot cascade; when several platforms overlap with
    // nonzero velocity the last match in list order wins.
    if let Some(top) = collision::ground_contact(&state.player.rect()) {
        state.player.pos.y = top;
        state.player.vel_y = 0.0;
        state.player.on_ground = true;
    }
    for platform in &state.platforms {
        let contact = collision::platform_contact(
            &state.player.rect(),
            prev_top,
            state.player.vel_y,
            platform,
        );
        match contact {
            Some(PlatformContact::Landed { top }) => {
                state.player.pos.y = top;
                state.player.vel_y = 0.0;
                state.player.on_ground = true;
            }
            Some(PlatformContact::Bumped { underside }) => {
                state.player.pos.y = underside;
                state.player.vel_y = 0.0;
            }
            None => {}
        }
    }

    // Resting is only true on the exact frame of a zero-velocity resolution
    if state.player.vel_y != 0.0 {
        state.player.on_ground = false;
    }

    // Enemy patrol and combat. Every enemy moves; the first contact in
    // list order decides the frame and later checks are skipped, so at
    // most one enemy is defeated (or one life lost) per frame. The
    // defeated entry is removed after the scan, not during it.
    let player_rect = state.player.rect();
    let vel_y = state.player.vel_y;
    let mut outcome: Option<EnemyOutcome> = None;
    for (idx, enemy) in state.enemies.iter_mut().enumerate() {
        enemy.rect.x += enemy.dir * enemy.speed;
        if enemy.rect.x <= 0.0 || enemy.rect.x >= WINDOW_WIDTH - enemy.rect.w {
            enemy.dir = -enemy.dir;
        }

        if outcome.is_none() {
            outcome = match collision::enemy_contact(&player_rect, prev_top, vel_y, &enemy.rect) {
                Some(EnemyContact::Pounce) => Some(EnemyOutcome::Defeated(idx)),
                Some(EnemyContact::Hurt) => Some(EnemyOutcome::Hurt),
                None => None,
            };
        }
    }
    match outcome {
        Some(EnemyOutcome::Defeated(idx)) => {
            state.enemies.remove(idx);
            state.score += POUNCE_SCORE;
            state.player.vel_y = POUNCE_BOUNCE;
        }
        Some(EnemyOutcome::Hurt) => lose_life(state),
        None => {}
    }

    // Falling below the window costs a life, exactly like enemy damage.
    // The full-width ground line clamps the player first, so this only
    // fires if the level ever gains a gap in the ground.
    if state.phase == GamePhase::Playing && state.player.pos.y > WINDOW_HEIGHT {
        lose_life(state);
    }

    // Clearing the patrol is the sole win trigger
    if state.phase == GamePhase::Playing && state.enemies.is_empty() {
        state.phase = GamePhase::Won;
        log::info!("all enemies cleared, final score {}", state.score);
    }
}

/// Decrement lives, then either respawn at the start position or end the
/// session when none remain
fn lose_life(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        log::info!("out of lives, game over at score {}", state.score);
    } else {
        state.respawn_player();
    }
}
