//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One `tick` advances exactly one fixed 60 Hz frame
//! - Entity scans run in stable list order; removals happen after the scan
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{EnemyContact, PlatformContact};
pub use rect::Rect;
pub use state::{Enemy, GamePhase, GameState, Player, level_enemies, level_platforms};
pub use tick::{TickInput, tick};
