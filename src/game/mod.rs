//! Gameplay
//!
//! - character: shared kinematics for the hero and patrolling enemies
//! - runtime: mode switching, per-tick rules, menu clicks
//! - renderer: draws the active screen

pub mod character;
pub mod runtime;
pub mod renderer;

pub use runtime::{GameState, TickClock};
pub use renderer::{draw_game, SpriteBank};
