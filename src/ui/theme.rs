//! Shared colors and font sizes

use macroquad::prelude::Color;

// =============================================================================
// Screens
// =============================================================================

/// Menu background (dark blue)
pub const MENU_BG: Color = Color::new(0.0, 0.0, 0.545, 1.0);

/// Sky behind the playfield
pub const SKY_COLOR: Color = Color::new(0.529, 0.808, 0.922, 1.0);

/// Ground strip below `ground_level`
pub const GROUND_COLOR: Color = Color::new(0.0, 0.502, 0.0, 1.0);

/// Win screen background
pub const WON_BG: Color = Color::new(0.0, 0.0, 0.0, 1.0);

// =============================================================================
// Buttons
// =============================================================================

/// Button fill (light blue)
pub const BUTTON_FILL: Color = Color::new(0.678, 0.847, 0.902, 1.0);

/// Button outline
pub const BUTTON_BORDER: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Button label
pub const BUTTON_TEXT: Color = Color::new(0.0, 0.0, 0.0, 1.0);

// =============================================================================
// Placeholder sprites
// =============================================================================

pub const HERO_PLACEHOLDER: Color = Color::new(0.0, 0.0, 1.0, 1.0);
pub const ENEMY_PLACEHOLDER: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const UNKNOWN_PLACEHOLDER: Color = Color::new(0.502, 0.502, 0.502, 1.0);

/// Text drawn on top of anything
pub const TEXT_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

pub const FONT_SIZE_TITLE: f32 = 60.0;
pub const FONT_SIZE_BUTTON: f32 = 30.0;
pub const FONT_SIZE_HUD: f32 = 30.0;
pub const FONT_SIZE_SPRITE: f32 = 12.0;
