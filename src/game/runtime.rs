//! Game runtime
//!
//! Owns everything that changes while the game runs: the current mode, the
//! hero and enemies of the active session, the jump counter and the music
//! flag. The frame loop calls [`GameState::update`] once per tick and
//! [`GameState::on_mouse_down`] for every click; drawing only reads.

use rand::rngs::StdRng;
use rand::Rng;

use crate::audio::{AudioError, AudioSink, SoundEffect, BACKGROUND_TRACK};
use crate::config::{GameConfig, SCREEN_WIDTH};
use crate::input::Controls;
use crate::ui::{dispatch_click, main_menu, Button, MenuAction};
use super::character::{Character, CharacterEvent};

/// Never run more than this many simulation ticks for one rendered frame
const MAX_CATCH_UP_TICKS: u32 = 5;

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Menu,
    Playing,
    /// Terminal until the process restarts
    Won,
}

/// Fixed-step clock: turns variable frame times into whole simulation ticks
#[derive(Debug, Clone)]
pub struct TickClock {
    step: f64,
    accumulator: f64,
}

impl TickClock {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            step: 1.0 / tick_rate.max(1) as f64,
            accumulator: 0.0,
        }
    }

    /// Add `dt` seconds and return how many ticks to run now
    pub fn advance(&mut self, dt: f64) -> u32 {
        self.accumulator += dt.max(0.0);
        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < MAX_CATCH_UP_TICKS {
            self.accumulator -= self.step;
            ticks += 1;
        }
        // Drop the backlog after a long stall instead of fast-forwarding
        if ticks == MAX_CATCH_UP_TICKS {
            self.accumulator = self.accumulator.min(self.step);
        }
        ticks
    }
}

/// Hero and enemies of the current play session
#[derive(Debug, Clone)]
pub struct Session {
    pub hero: Character,
    pub enemies: Vec<Character>,
}

pub struct GameState {
    pub config: GameConfig,
    pub mode: GameMode,
    /// Present only while Playing
    pub session: Option<Session>,
    /// Enemies the hero has passed since the last (re)start
    pub enemies_jumped: u32,
    /// Gates background music and the jump sound
    pub music_on: bool,
    pub buttons: Vec<Button>,
    /// Set by the Exit button; the frame loop stops when it sees this
    pub exit_requested: bool,
    rng: StdRng,
}

impl GameState {
    pub fn new(config: GameConfig, rng: StdRng) -> Self {
        let music_on = config.music_starts_on;
        Self {
            buttons: main_menu(SCREEN_WIDTH, music_on),
            config,
            mode: GameMode::Menu,
            session: None,
            enemies_jumped: 0,
            music_on,
            exit_requested: false,
            rng,
        }
    }

    /// Start background music at launch if it is enabled
    pub fn start_music(&mut self, audio: &mut dyn AudioSink) {
        if self.music_on {
            best_effort(audio.play_track(BACKGROUND_TRACK), "background music");
        }
    }

    /// Enter Playing with a fresh hero, a full set of enemies and zeroed counters
    pub fn start_game(&mut self) {
        let hero_tuning = self.config.hero;
        let mut enemies = Vec::with_capacity(self.config.enemy.min_count);
        for _ in 0..self.config.enemy.min_count {
            enemies.push(spawn_enemy(&mut self.rng, &self.config));
        }

        self.enemies_jumped = 0;
        self.session = Some(Session {
            hero: Character::hero(hero_tuning.start_x, hero_tuning.start_y, self.config.animation_period),
            enemies,
        });
        if self.mode != GameMode::Playing {
            log::info!("Mode: {:?} -> Playing", self.mode);
        }
        self.mode = GameMode::Playing;
    }

    pub fn toggle_music(&mut self, audio: &mut dyn AudioSink) {
        self.music_on = !self.music_on;
        if self.music_on {
            best_effort(audio.play_track(BACKGROUND_TRACK), "background music");
        } else {
            best_effort(audio.stop_track(), "stop music");
        }
        self.buttons = main_menu(SCREEN_WIDTH, self.music_on);
        log::info!("Music {}", if self.music_on { "on" } else { "off" });
    }

    /// Pointer-down: only the menu reacts
    pub fn on_mouse_down(&mut self, x: f32, y: f32, audio: &mut dyn AudioSink) {
        if self.mode != GameMode::Menu {
            return;
        }
        match dispatch_click(&self.buttons, x, y) {
            Some(MenuAction::StartGame) => self.start_game(),
            Some(MenuAction::ToggleMusic) => self.toggle_music(audio),
            Some(MenuAction::Exit) => {
                log::info!("Exit requested");
                self.exit_requested = true;
            }
            None => {}
        }
    }

    /// One simulation tick. Does nothing outside Playing.
    pub fn update(&mut self, controls: Controls, audio: &mut dyn AudioSink) {
        if self.mode != GameMode::Playing {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        // 1-2. Kinematics
        if let Some(CharacterEvent::Jumped) = session.hero.update(controls, &self.config) {
            if self.music_on {
                best_effort(audio.play_effect(SoundEffect::Jump), "jump sound");
            }
        }
        for enemy in &mut session.enemies {
            enemy.update(Controls::default(), &self.config);
        }

        // 3. Any hit restarts the session; nothing else happens this tick
        let buffer = self.config.hit_buffer;
        let hit_box = session.hero.rect().inflate(buffer, buffer);
        if session.enemies.iter().any(|e| hit_box.intersects(&e.rect())) {
            best_effort(audio.play_effect(SoundEffect::Hit), "hit sound");
            log::info!("Hero hit after passing {} enemies, restarting", self.enemies_jumped);
            self.start_game();
            return;
        }

        // 4. Each enemy counts once, the first tick the hero is past it
        let hero_x = session.hero.body.x;
        for enemy in &mut session.enemies {
            let enemy_x = enemy.body.x;
            if let Some(patrol) = enemy.patrol_mut() {
                if !patrol.jumped && hero_x > enemy_x {
                    patrol.jumped = true;
                    self.enemies_jumped += 1;
                }
            }
        }

        // 5. Top up, one per tick
        if session.enemies.len() < self.config.enemy.min_count {
            session.enemies.push(spawn_enemy(&mut self.rng, &self.config));
        }

        // 6. Off the right edge wins
        if hero_x > SCREEN_WIDTH {
            log::info!("Mode: Playing -> Won ({} enemies jumped)", self.enemies_jumped);
            self.mode = GameMode::Won;
            self.session = None;
            best_effort(audio.play_effect(SoundEffect::Win), "win sound");
        }
    }
}

/// New enemy at a random x in the spawn range, standing on the ground
fn spawn_enemy(rng: &mut StdRng, config: &GameConfig) -> Character {
    let tuning = &config.enemy;
    let x = rng.gen_range(tuning.spawn_min_x..=tuning.spawn_max_x()) as f32;
    let variant = rng.gen_range(1..=tuning.variants);
    Character::enemy(x, config.ground_level, tuning.patrol_half_width, variant, config.animation_period)
}

/// Audio never affects gameplay: log and move on
fn best_effort(result: Result<(), AudioError>, what: &str) {
    if let Err(e) = result {
        log::debug!("Skipped {}: {}", what, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::{AudioCall, RecordingAudio};
    use rand::SeedableRng;

    const RIGHT: Controls = Controls { left: false, right: true, up: false };
    const UP: Controls = Controls { left: false, right: false, up: true };

    fn game_with(config: GameConfig) -> GameState {
        GameState::new(config, StdRng::seed_from_u64(7))
    }

    /// Playing with a single enemy parked high above the hero's lane
    fn open_field() -> GameState {
        let mut config = GameConfig::default();
        config.enemy.min_count = 1;
        let mut game = game_with(config);
        game.start_game();
        let session = game.session.as_mut().unwrap();
        session.enemies = vec![Character::enemy(300.0, 100.0, 0.0, 1, 10)];
        game
    }

    fn session(game: &GameState) -> &Session {
        game.session.as_ref().unwrap()
    }

    #[test]
    fn test_starts_in_menu() {
        let game = game_with(GameConfig::default());
        assert_eq!(game.mode, GameMode::Menu);
        assert!(game.session.is_none());
        assert_eq!(game.buttons.len(), 3);
    }

    #[test]
    fn test_start_game_fresh_state() {
        let mut game = game_with(GameConfig::default());
        game.enemies_jumped = 4;
        game.start_game();
        assert_eq!(game.mode, GameMode::Playing);
        assert_eq!(game.enemies_jumped, 0);
        let s = session(&game);
        assert_eq!(s.enemies.len(), 3);
        assert_eq!((s.hero.body.x, s.hero.body.y), (100.0, 500.0));
    }

    #[test]
    fn test_spawns_inside_range() {
        let mut game = game_with(GameConfig::default());
        for _ in 0..50 {
            game.start_game();
            for enemy in &session(&game).enemies {
                let x = enemy.body.x;
                let p = enemy.patrol().unwrap();
                assert!((300.0..=700.0).contains(&x));
                assert_eq!(x.fract(), 0.0);
                assert_eq!(p.left_bound, x - 50.0);
                assert_eq!(p.right_bound, x + 50.0);
                assert!(["enemy1_1", "enemy2_1", "enemy3_1"].contains(&enemy.sprite()));
            }
        }
    }

    #[test]
    fn test_menu_click_outside_buttons() {
        let mut game = game_with(GameConfig::default());
        let mut audio = RecordingAudio::default();
        game.on_mouse_down(0.0, 0.0, &mut audio);
        assert_eq!(game.mode, GameMode::Menu);
        assert!(game.music_on);
        assert!(!game.exit_requested);
        assert!(audio.calls.is_empty());
    }

    #[test]
    fn test_start_button() {
        let mut game = game_with(GameConfig::default());
        let mut audio = RecordingAudio::default();
        game.on_mouse_down(400.0, 225.0, &mut audio);
        assert_eq!(game.mode, GameMode::Playing);
        assert_eq!(session(&game).enemies.len(), 3);
    }

    #[test]
    fn test_music_button_toggles() {
        let mut game = game_with(GameConfig::default());
        let mut audio = RecordingAudio::default();
        game.on_mouse_down(400.0, 325.0, &mut audio);
        assert!(!game.music_on);
        assert_eq!(game.buttons[1].label, "Music: Off");
        game.on_mouse_down(400.0, 325.0, &mut audio);
        assert!(game.music_on);
        assert_eq!(audio.calls, [AudioCall::Stop, AudioCall::Play(BACKGROUND_TRACK.to_string())]);
    }

    #[test]
    fn test_exit_button() {
        let mut game = game_with(GameConfig::default());
        game.on_mouse_down(400.0, 425.0, &mut RecordingAudio::default());
        assert!(game.exit_requested);
        assert_eq!(game.mode, GameMode::Menu);
    }

    #[test]
    fn test_clicks_ignored_while_playing() {
        let mut game = open_field();
        game.on_mouse_down(400.0, 425.0, &mut RecordingAudio::default());
        assert!(!game.exit_requested);
    }

    #[test]
    fn test_start_music_respects_flag() {
        let mut audio = RecordingAudio::default();
        game_with(GameConfig::default()).start_music(&mut audio);
        assert_eq!(audio.calls, [AudioCall::Play(BACKGROUND_TRACK.to_string())]);

        let mut config = GameConfig::default();
        config.music_starts_on = false;
        let mut audio = RecordingAudio::default();
        game_with(config).start_music(&mut audio);
        assert!(audio.calls.is_empty());
    }

    #[test]
    fn test_collision_restarts() {
        let mut game = open_field();
        let mut audio = RecordingAudio::default();
        game.enemies_jumped = 2;
        {
            let s = game.session.as_mut().unwrap();
            // Hero box 125..175 shrunk to 132..167; enemy box 105..155
            s.enemies = vec![Character::enemy(130.0, 500.0, 0.0, 1, 10)];
            s.hero.body.x = 150.0;
        }
        game.update(Controls::default(), &mut audio);
        assert_eq!(audio.effects(), [SoundEffect::Hit]);
        assert_eq!(game.mode, GameMode::Playing);
        assert_eq!(game.enemies_jumped, 0);
        let s = session(&game);
        assert_eq!(s.hero.body.x, 100.0);
        assert_eq!(s.enemies.len(), 1);
        assert!(s.enemies[0].body.x >= 300.0);
    }

    #[test]
    fn test_hit_buffer_forgives_grazes() {
        let mut game = open_field();
        let mut audio = RecordingAudio::default();
        {
            let s = game.session.as_mut().unwrap();
            // Hero box 75..125; shrunk box 82..117; enemy box 120..170
            s.enemies = vec![Character::enemy(145.0, 500.0, 0.0, 1, 10)];
        }
        game.update(Controls::default(), &mut audio);
        assert!(audio.effects().is_empty());
        assert_eq!(session(&game).enemies[0].body.x, 145.0);
    }

    #[test]
    fn test_shrunk_hit_box_keeps_more_on_the_left() {
        let mut game = open_field();
        let mut audio = RecordingAudio::default();
        {
            let s = game.session.as_mut().unwrap();
            // Shrunk hero box starts at 82; enemy box 32.25..82.25 reaches past it
            s.enemies = vec![Character::enemy(57.25, 500.0, 0.0, 1, 10)];
        }
        game.update(Controls::default(), &mut audio);
        assert_eq!(audio.effects(), [SoundEffect::Hit]);

        let mut game = open_field();
        let mut audio = RecordingAudio::default();
        {
            let s = game.session.as_mut().unwrap();
            // Shrunk hero box ends at 117; enemy box 117.25..167.25 clears it
            s.enemies = vec![Character::enemy(142.25, 500.0, 0.0, 1, 10)];
        }
        game.update(Controls::default(), &mut audio);
        assert!(audio.effects().is_empty());
    }

    #[test]
    fn test_failing_audio_does_not_change_outcome() {
        let mut game = open_field();
        let mut audio = RecordingAudio::failing();
        game.session.as_mut().unwrap().enemies = vec![Character::enemy(100.0, 500.0, 0.0, 1, 10)];
        game.update(Controls::default(), &mut audio);
        assert_eq!(audio.effects(), [SoundEffect::Hit]);
        assert_eq!(game.mode, GameMode::Playing);
        assert_eq!(session(&game).hero.body.x, 100.0);
    }

    #[test]
    fn test_jump_sound_only_with_music() {
        let mut game = open_field();
        let mut audio = RecordingAudio::default();
        game.update(Controls::default(), &mut audio); // settle onto the ground
        game.update(UP, &mut audio);
        assert_eq!(audio.effects(), [SoundEffect::Jump]);

        let mut game = open_field();
        game.music_on = false;
        let mut audio = RecordingAudio::default();
        game.update(Controls::default(), &mut audio);
        game.update(UP, &mut audio);
        assert!(audio.effects().is_empty());
        assert!(!session(&game).hero.on_ground());
    }

    #[test]
    fn test_jumped_counter_counts_once() {
        let mut game = open_field();
        let mut audio = RecordingAudio::default();
        game.session.as_mut().unwrap().hero.body.x = 295.0;
        game.update(RIGHT, &mut audio); // 298
        assert_eq!(game.enemies_jumped, 0);
        game.update(RIGHT, &mut audio); // 301
        assert_eq!(game.enemies_jumped, 1);
        for _ in 0..10 {
            game.update(RIGHT, &mut audio);
        }
        assert_eq!(game.enemies_jumped, 1);
        assert!(session(&game).enemies[0].patrol().unwrap().jumped);
    }

    #[test]
    fn test_tops_up_one_per_tick() {
        let mut config = GameConfig::default();
        config.enemy.spawn_min_x = 600;
        let mut game = game_with(config);
        game.start_game();
        game.session.as_mut().unwrap().enemies.clear();
        let mut audio = RecordingAudio::default();
        game.update(Controls::default(), &mut audio);
        assert_eq!(session(&game).enemies.len(), 1);
        game.update(Controls::default(), &mut audio);
        game.update(Controls::default(), &mut audio);
        game.update(Controls::default(), &mut audio);
        assert_eq!(session(&game).enemies.len(), 3);
    }

    #[test]
    fn test_extra_enemies_are_kept() {
        let mut game = open_field();
        let extra: Vec<_> = (0..5).map(|i| Character::enemy(400.0 + i as f32 * 60.0, 100.0, 0.0, 1, 10)).collect();
        game.session.as_mut().unwrap().enemies = extra;
        game.update(Controls::default(), &mut RecordingAudio::default());
        assert_eq!(session(&game).enemies.len(), 5);
    }

    #[test]
    fn test_run_to_the_right_edge_wins() {
        let mut game = open_field();
        let mut audio = RecordingAudio::default();
        game.update(Controls::default(), &mut audio); // settle at x = 100
        for _ in 0..233 {
            game.update(RIGHT, &mut audio);
        }
        assert_eq!(game.mode, GameMode::Playing);
        assert!((session(&game).hero.body.x - 799.0).abs() < 0.001);
        assert_eq!(game.enemies_jumped, 1);

        game.update(RIGHT, &mut audio);
        assert_eq!(game.mode, GameMode::Won);
        assert!(game.session.is_none());
        assert_eq!(game.enemies_jumped, 1);
        assert_eq!(audio.effects(), [SoundEffect::Win]);
    }

    #[test]
    fn test_won_is_terminal() {
        let mut game = open_field();
        game.session.as_mut().unwrap().hero.body.x = 799.0;
        let mut audio = RecordingAudio::default();
        game.update(RIGHT, &mut audio);
        assert_eq!(game.mode, GameMode::Won);

        game.update(RIGHT, &mut audio);
        game.on_mouse_down(400.0, 225.0, &mut audio);
        assert_eq!(game.mode, GameMode::Won);
        assert_eq!(audio.effects(), [SoundEffect::Win]);
    }

    #[test]
    fn test_tick_clock() {
        let mut clock = TickClock::new(60);
        assert_eq!(clock.advance(1.0 / 60.0), 1);
        assert_eq!(clock.advance(0.004), 0);
        assert_eq!(clock.advance(0.04), 2);
        assert_eq!(clock.advance(1.0), MAX_CATCH_UP_TICKS);
        assert!(clock.advance(0.0) <= 1);
    }
}
