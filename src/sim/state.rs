//! Game state and core simulation types
//!
//! The whole session is one `GameState` value, mutated in place by
//! `sim::tick` once per frame.

use glam::Vec2;

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Session active; physics and combat run every frame
    Playing,
    /// Lives exhausted; only the restart key is live
    GameOver,
    /// Every enemy defeated; only the restart key is live
    Won,
}

/// The player-controlled square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Top-left corner in pixels
    pub pos: Vec2,
    /// Vertical velocity in pixels per frame; positive is downward
    pub vel_y: f32,
    /// Resting on the ground or a platform as of the last resolved frame.
    /// True implies `vel_y` was zeroed by that frame's collision pass.
    pub on_ground: bool,
}

impl Player {
    /// Player at the spawn point with motion state cleared
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            vel_y: 0.0,
            on_ground: false,
        }
    }

    /// Collision rectangle at the current position
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_SIZE, PLAYER_SIZE)
    }
}

/// A patrolling enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    /// Horizontal heading, +1 or -1; reflects off the window edges
    pub dir: f32,
    /// Pixels per frame along `dir`
    pub speed: f32,
}

impl Enemy {
    pub const fn new(x: f32, y: f32, dir: f32, speed: f32) -> Self {
        Self {
            rect: Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
            dir,
            speed,
        }
    }
}

/// The five static platforms, immutable for the session
pub fn level_platforms() -> Vec<Rect> {
    vec![
        Rect::new(100.0, 450.0, 200.0, 20.0),
        Rect::new(400.0, 350.0, 200.0, 20.0),
        Rect::new(600.0, 250.0, 150.0, 20.0),
        Rect::new(50.0, 200.0, 150.0, 20.0),
        Rect::new(300.0, 150.0, 150.0, 20.0),
    ]
}

/// The initial enemy patrol, restored in full on every restart
pub fn level_enemies() -> Vec<Enemy> {
    vec![
        Enemy::new(200.0, WINDOW_HEIGHT - 50.0, 1.0, 1.0),
        Enemy::new(500.0, 320.0, 1.0, 0.8),
        Enemy::new(700.0, 220.0, -1.0, 1.0),
        Enemy::new(150.0, 420.0, -1.0, 1.2),
        Enemy::new(600.0, 320.0, 1.0, 0.9),
    ]
}

/// Complete session state, advanced by `sim::tick`
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Player,
    pub platforms: Vec<Rect>,
    /// Live enemies; defeated entries are removed. An empty list while
    /// Playing is the sole win trigger.
    pub enemies: Vec<Enemy>,
    /// Always a multiple of the per-enemy award
    pub score: u32,
    pub lives: u8,
    pub phase: GamePhase,
}

impl GameState {
    /// Fresh session: full lives, zero score, full level layout
    pub fn new() -> Self {
        Self {
            player: Player::spawn(),
            platforms: level_platforms(),
            enemies: level_enemies(),
            score: 0,
            lives: START_LIVES,
            phase: GamePhase::Playing,
        }
    }

    /// Put the player back at the spawn point after losing a life
    pub fn respawn_player(&mut self) {
        self.player = Player::spawn();
    }

    /// Restart action: reset everything except the immutable platforms
    pub fn reset(&mut self) {
        self.player = Player::spawn();
        self.enemies = level_enemies();
        self.score = 0;
        self.lives = START_LIVES;
        self.phase = GamePhase::Playing;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
