//! Screen drawing
//!
//! Reads [`GameState`] and draws the active screen. Characters are drawn from
//! `images/<sprite id>.png` when that file was loaded at startup; otherwise a
//! labelled placeholder shape stands in for the missing image.

use std::collections::HashMap;
use std::path::Path;
use macroquad::prelude::*;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::ui::{
    self, draw_text_centered, FONT_SIZE_HUD, FONT_SIZE_SPRITE, FONT_SIZE_TITLE,
};
use super::character::{enemy_frames, Character, CHARACTER_SIZE, HERO_FRAMES};
use super::runtime::{GameMode, GameState};

/// Shape drawn in place of a missing sprite image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Blue circle
    Hero,
    /// Red square
    Enemy,
    /// Gray square labelled "sprite"
    Unknown,
}

impl Placeholder {
    pub fn for_sprite(id: &str) -> Self {
        if id.starts_with("hero") {
            Placeholder::Hero
        } else if id.starts_with("enemy") {
            Placeholder::Enemy
        } else {
            Placeholder::Unknown
        }
    }
}

/// Draw a placeholder for sprite `id` centered at (cx, cy)
pub fn draw_placeholder_sprite(id: &str, cx: f32, cy: f32) {
    let half = CHARACTER_SIZE * 0.5;
    let label = match Placeholder::for_sprite(id) {
        Placeholder::Hero => {
            draw_circle(cx, cy, half, ui::HERO_PLACEHOLDER);
            id
        }
        Placeholder::Enemy => {
            draw_rectangle(cx - half, cy - half, CHARACTER_SIZE, CHARACTER_SIZE, ui::ENEMY_PLACEHOLDER);
            id
        }
        Placeholder::Unknown => {
            draw_rectangle(cx - half, cy - half, CHARACTER_SIZE, CHARACTER_SIZE, ui::UNKNOWN_PLACEHOLDER);
            "sprite"
        }
    };
    draw_text_centered(label, cx, cy, FONT_SIZE_SPRITE, ui::TEXT_COLOR);
}

/// Sprite images keyed by sprite id
#[derive(Default)]
pub struct SpriteBank {
    textures: HashMap<String, Texture2D>,
}

impl SpriteBank {
    /// Every sprite id the game can show: hero frames plus all enemy variants
    pub fn sprite_ids(enemy_variants: u32) -> Vec<String> {
        let mut ids: Vec<String> = HERO_FRAMES.iter().map(|f| f.to_string()).collect();
        for variant in 1..=enemy_variants {
            ids.extend(enemy_frames(variant));
        }
        ids
    }

    /// Try `images/<id>.png` for every sprite id. Missing images fall back to placeholders.
    pub async fn load(asset_dir: &Path, enemy_variants: u32) -> Self {
        let mut textures = HashMap::new();
        let mut missing = 0;
        for id in Self::sprite_ids(enemy_variants) {
            let path = asset_dir.join("images").join(format!("{}.png", id));
            match load_texture(&path.to_string_lossy()).await {
                Ok(tex) => {
                    tex.set_filter(FilterMode::Nearest);
                    textures.insert(id, tex);
                }
                Err(_) => missing += 1,
            }
        }
        if missing > 0 {
            log::warn!("{} sprite images missing, drawing placeholders", missing);
        }
        log::info!("Loaded {} sprite images", textures.len());
        Self { textures }
    }

    pub fn draw_character(&self, character: &Character) {
        let rect = character.rect();
        match self.textures.get(character.sprite()) {
            Some(tex) => draw_texture_ex(
                tex,
                rect.x,
                rect.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(rect.w, rect.h)),
                    ..Default::default()
                },
            ),
            None => draw_placeholder_sprite(character.sprite(), rect.center_x(), rect.center_y()),
        }
    }
}

/// Draw whichever screen is active
pub fn draw_game(game: &GameState, sprites: &SpriteBank) {
    match game.mode {
        GameMode::Menu => draw_menu(game),
        GameMode::Playing => draw_playing(game, sprites),
        GameMode::Won => draw_won(game),
    }
}

fn draw_menu(game: &GameState) {
    clear_background(ui::MENU_BG);
    draw_text_centered("Main Menu", SCREEN_WIDTH * 0.5, 100.0, FONT_SIZE_TITLE, ui::TEXT_COLOR);
    for button in &game.buttons {
        button.draw();
    }
}

fn draw_playing(game: &GameState, sprites: &SpriteBank) {
    clear_background(ui::SKY_COLOR);
    let ground = game.config.ground_level;
    draw_rectangle(0.0, ground, SCREEN_WIDTH, SCREEN_HEIGHT - ground, ui::GROUND_COLOR);

    if let Some(session) = &game.session {
        sprites.draw_character(&session.hero);
        for enemy in &session.enemies {
            sprites.draw_character(enemy);
        }
    }

    // Top-left, baseline one line below the edge
    draw_text(&jumped_label(game.enemies_jumped), 10.0, 10.0 + FONT_SIZE_HUD * 0.75, FONT_SIZE_HUD, ui::TEXT_COLOR);
}

fn draw_won(game: &GameState) {
    clear_background(ui::WON_BG);
    let cx = SCREEN_WIDTH * 0.5;
    let cy = SCREEN_HEIGHT * 0.5;
    draw_text_centered("You Won!", cx, cy, FONT_SIZE_TITLE, ui::TEXT_COLOR);
    draw_text_centered(&jumped_label(game.enemies_jumped), cx, cy + 60.0, FONT_SIZE_HUD, ui::TEXT_COLOR);
}

fn jumped_label(count: u32) -> String {
    format!("Enemies Jumped: {}", count)
}
