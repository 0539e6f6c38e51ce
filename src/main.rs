//! HOP HERO: a tiny side-scrolling platformer
//!
//! Run right, jump over the patrolling enemies, reach the far edge of the
//! screen. Touching an enemy restarts the run.
//!
//! Controls: arrow keys (or A/D + W/Space), mouse for the menu.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod audio;
mod config;
mod game;
mod input;
mod ui;

use macroquad::prelude::*;
// Leading `::` so the crate is not confused with the prelude's quad-rand module
use ::rand::rngs::StdRng;
use ::rand::SeedableRng;

use audio::{AudioSink, MacroquadAudio, NullAudio};
use config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use game::{draw_game, GameState, SpriteBank, TickClock};
use input::Controls;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("HOP HERO v{}", VERSION),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        // Fixed canvas: screen coordinates are game coordinates
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

/// Enemy spawn RNG seeded from the wall clock (seconds), so runs differ
fn spawn_rng(now: f64) -> StdRng {
    StdRng::seed_from_u64((now * 1000.0) as u64)
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config::load_or_default(config::config_path());

    let sprites = SpriteBank::load(&config.asset_dir, config.enemy.variants).await;
    let mut audio: Box<dyn AudioSink> = if config.audio_enabled {
        Box::new(MacroquadAudio::load(&config.asset_dir).await)
    } else {
        log::info!("Audio disabled by config");
        Box::new(NullAudio)
    };

    let mut clock = TickClock::new(config.tick_rate);
    let mut game = GameState::new(config, spawn_rng(macroquad::miniquad::date::now()));
    game.start_music(audio.as_mut());

    log::info!("=== HOP HERO v{} ===", VERSION);

    loop {
        for _ in 0..clock.advance(get_frame_time() as f64) {
            game.update(Controls::poll(), audio.as_mut());
        }

        draw_game(&game, &sprites);

        if let Some((x, y)) = input::pointer_down() {
            game.on_mouse_down(x, y, audio.as_mut());
        }
        if game.exit_requested {
            break;
        }

        next_frame().await;
    }
}
