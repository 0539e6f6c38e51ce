//! Clickable menu buttons

use macroquad::prelude::*;
use super::{Rect, BUTTON_BORDER, BUTTON_FILL, BUTTON_TEXT, FONT_SIZE_BUTTON};

/// What a menu button does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    StartGame,
    ToggleMusic,
    Exit,
}

/// A rectangular clickable region with a label
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub action: MenuAction,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            rect,
            label: label.into(),
            action,
        }
    }

    /// Action to run if the pointer is inside this button
    pub fn check_click(&self, x: f32, y: f32) -> Option<MenuAction> {
        self.rect.contains(x, y).then_some(self.action)
    }

    pub fn draw(&self) {
        let r = self.rect;
        draw_rectangle(r.x, r.y, r.w, r.h, BUTTON_FILL);
        draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, BUTTON_BORDER);
        draw_text_centered(&self.label, r.center_x(), r.center_y(), FONT_SIZE_BUTTON, BUTTON_TEXT);
    }
}

/// The main menu: Start, Music toggle, Exit, stacked in the middle of the screen
pub fn main_menu(screen_width: f32, music_on: bool) -> Vec<Button> {
    let x = (screen_width * 0.5 - 100.0).round();
    let music_label = if music_on { "Music: On" } else { "Music: Off" };
    vec![
        Button::new(Rect::new(x, 200.0, 200.0, 50.0), "Start Game", MenuAction::StartGame),
        Button::new(Rect::new(x, 300.0, 200.0, 50.0), music_label, MenuAction::ToggleMusic),
        Button::new(Rect::new(x, 400.0, 200.0, 50.0), "Exit", MenuAction::Exit),
    ]
}

/// First button under the pointer wins; later overlapping buttons are ignored
pub fn dispatch_click(buttons: &[Button], x: f32, y: f32) -> Option<MenuAction> {
    buttons.iter().find_map(|b| b.check_click(x, y))
}

/// Draw text with its center at (cx, cy)
pub fn draw_text_centered(text: &str, cx: f32, cy: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    // Baseline sits offset_y below the top of the glyph box
    let x = (cx - dims.width * 0.5).round();
    let y = (cy - dims.height * 0.5 + dims.offset_y).round();
    draw_text(text, x, y, font_size, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_outside_all_buttons() {
        let buttons = main_menu(800.0, true);
        assert_eq!(dispatch_click(&buttons, 0.0, 0.0), None);
        assert_eq!(dispatch_click(&buttons, 400.0, 275.0), None);
    }

    #[test]
    fn test_click_each_button() {
        let buttons = main_menu(800.0, true);
        assert_eq!(dispatch_click(&buttons, 400.0, 225.0), Some(MenuAction::StartGame));
        assert_eq!(dispatch_click(&buttons, 300.0, 300.0), Some(MenuAction::ToggleMusic));
        assert_eq!(dispatch_click(&buttons, 499.0, 449.0), Some(MenuAction::Exit));
        assert_eq!(dispatch_click(&buttons, 500.0, 425.0), None);
    }

    #[test]
    fn test_overlapping_buttons_first_wins() {
        let buttons = vec![
            Button::new(Rect::new(0.0, 0.0, 100.0, 100.0), "A", MenuAction::Exit),
            Button::new(Rect::new(50.0, 50.0, 100.0, 100.0), "B", MenuAction::StartGame),
        ];
        assert_eq!(dispatch_click(&buttons, 75.0, 75.0), Some(MenuAction::Exit));
        assert_eq!(dispatch_click(&buttons, 120.0, 120.0), Some(MenuAction::StartGame));
    }

    #[test]
    fn test_music_label_follows_flag() {
        assert_eq!(main_menu(800.0, true)[1].label, "Music: On");
        assert_eq!(main_menu(800.0, false)[1].label, "Music: Off");
    }
}
