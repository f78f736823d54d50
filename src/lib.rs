//! Pounce - a single-screen platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `render`: Read-only projection of game state to draw calls

pub mod render;
pub mod sim;

/// Game configuration constants
///
/// Motion constants are in per-frame units: the simulation advances in
/// fixed 60 Hz steps, so speeds and accelerations are tuned per frame.
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum sim steps per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Window dimensions in pixels
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;
    /// Window title
    pub const WINDOW_TITLE: &str = "Pounce";

    /// Height of the ground bar along the bottom edge
    pub const GROUND_THICKNESS: f32 = 10.0;

    /// Player square side length
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Highest y the player's top edge may reach while resting on the ground
    pub const GROUND_LINE: f32 = WINDOW_HEIGHT - PLAYER_SIZE - GROUND_THICKNESS;
    /// Spawn point (top-left corner); the player rests on the ground here
    pub const PLAYER_SPAWN_X: f32 = 50.0;
    pub const PLAYER_SPAWN_Y: f32 = GROUND_LINE;
    /// Horizontal speed per held direction key (pixels per frame)
    pub const PLAYER_SPEED: f32 = 6.0;
    /// Downward acceleration per frame; accumulation is uncapped
    pub const GRAVITY: f32 = 0.7;
    /// Vertical velocity applied on jump (negative is upward)
    pub const JUMP_VELOCITY: f32 = -18.0;
    /// Small upward bounce applied after defeating an enemy
    pub const POUNCE_BOUNCE: f32 = -8.0;

    /// Enemy square side length
    pub const ENEMY_SIZE: f32 = 30.0;
    /// Score awarded per defeated enemy
    pub const POUNCE_SCORE: u32 = 100;
    /// Lives at session start
    pub const START_LIVES: u8 = 3;
}
