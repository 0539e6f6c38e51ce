//! Menu widgets and shared styling
//!
//! Immediate-mode drawing through macroquad; the only retained state is the
//! button list owned by the game.

mod rect;
mod button;
mod theme;

pub use rect::*;
pub use button::*;
pub use theme::*;
