//! Keyboard and pointer polling
//!
//! Arrow keys drive the hero; A/D and W/Space work as aliases.

use macroquad::prelude::*;

/// Directional input sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

impl Controls {
    pub fn poll() -> Self {
        Self {
            left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            right: is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
            up: is_key_down(KeyCode::Up) || is_key_down(KeyCode::W) || is_key_down(KeyCode::Space),
        }
    }

    /// -1, 0 or +1. Left and right together cancel out.
    pub fn horizontal(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Canvas position of a left click this frame
pub fn pointer_down() -> Option<(f32, f32)> {
    is_mouse_button_pressed(MouseButton::Left).then(mouse_position)
}
