//! Game tuning loaded from RON
//!
//! Every field has a default, so a config file only needs to name the values
//! it changes. A missing or broken file never stops the game: the loader logs
//! and falls back to the built-in defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Logical canvas width. All coordinates live in this space.
pub const SCREEN_WIDTH: f32 = 800.0;
/// Logical canvas height
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Default location of the config file (relative to the working directory)
pub const DEFAULT_CONFIG_PATH: &str = "assets/config.ron";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`]
pub const CONFIG_PATH_ENV: &str = "HOP_HERO_CONFIG";

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Player character tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroTuning {
    pub start_x: f32,
    pub start_y: f32,
    /// Horizontal speed in units per tick
    pub speed: f32,
    /// Vertical velocity applied on jump (negative = up)
    pub jump_impulse: f32,
    /// Added to vertical velocity every tick
    pub gravity: f32,
}

impl Default for HeroTuning {
    fn default() -> Self {
        Self {
            start_x: 100.0,
            start_y: 500.0,
            speed: 3.0,
            jump_impulse: -15.0,
            gravity: 0.5,
        }
    }
}

/// Patrolling enemy tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub speed: f32,
    /// Patrol bounds are spawn x +/- this value
    pub patrol_half_width: f32,
    /// Leftmost spawn x (inclusive)
    pub spawn_min_x: i32,
    /// Rightmost spawn x is `SCREEN_WIDTH - spawn_margin` (inclusive)
    pub spawn_margin: i32,
    /// Sprite variants are numbered 1..=variants
    pub variants: u32,
    /// The field is topped up to this many enemies
    pub min_count: usize,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            speed: 2.0,
            patrol_half_width: 50.0,
            spawn_min_x: 300,
            spawn_margin: 100,
            variants: 3,
            min_count: 3,
        }
    }
}

impl EnemyTuning {
    /// Rightmost spawn x (inclusive)
    pub fn spawn_max_x(&self) -> i32 {
        SCREEN_WIDTH as i32 - self.spawn_margin
    }
}

/// All gameplay tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// The only floor: nothing falls below this y
    pub ground_level: f32,
    /// Shrinks the hero's hit box on each axis before enemy overlap tests
    pub hit_buffer: f32,
    /// Animation frame advances every this many ticks
    pub animation_period: u32,
    /// Fixed simulation rate (updates per second)
    pub tick_rate: u32,
    pub music_starts_on: bool,
    /// false: skip loading sounds entirely and run silent
    pub audio_enabled: bool,
    /// Root for images/, sounds/ and music/
    pub asset_dir: PathBuf,
    pub hero: HeroTuning,
    pub enemy: EnemyTuning,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ground_level: 500.0,
            hit_buffer: -15.0,
            animation_period: 10,
            tick_rate: 60,
            music_starts_on: true,
            audio_enabled: true,
            asset_dir: PathBuf::from("assets"),
            hero: HeroTuning::default(),
            enemy: EnemyTuning::default(),
        }
    }
}

impl GameConfig {
    /// Reject values that would break the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |msg: String| Err(ConfigError::ValidationError(msg));

        if self.tick_rate == 0 {
            return fail("tick_rate must be positive".to_string());
        }
        if self.animation_period == 0 {
            return fail("animation_period must be positive".to_string());
        }
        if !(self.hero.speed > 0.0) || !(self.enemy.speed > 0.0) {
            return fail(format!(
                "speeds must be positive (hero {}, enemy {})",
                self.hero.speed, self.enemy.speed
            ));
        }
        if !(self.hero.gravity > 0.0) {
            return fail(format!("gravity must be positive, got {}", self.hero.gravity));
        }
        if !(self.hero.jump_impulse < 0.0) {
            return fail(format!("jump_impulse must be negative, got {}", self.hero.jump_impulse));
        }
        if !(self.enemy.patrol_half_width >= 0.0) {
            return fail(format!(
                "patrol_half_width must not be negative, got {}",
                self.enemy.patrol_half_width
            ));
        }
        if self.enemy.variants == 0 {
            return fail("enemy.variants must be at least 1".to_string());
        }
        if self.enemy.min_count == 0 {
            return fail("enemy.min_count must be at least 1".to_string());
        }
        if self.enemy.spawn_min_x > self.enemy.spawn_max_x() {
            return fail(format!(
                "empty spawn range [{}, {}]",
                self.enemy.spawn_min_x,
                self.enemy.spawn_max_x()
            ));
        }
        Ok(())
    }

    /// Parse and validate a config from a RON string
    pub fn from_ron(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

/// Load a config file
pub fn load<P: AsRef<Path>>(path: P) -> Result<GameConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    GameConfig::from_ron(&contents)
}

/// Path to read the config from: `$HOP_HERO_CONFIG` or the default location
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Load a config file, falling back to defaults on any problem
pub fn load_or_default<P: AsRef<Path>>(path: P) -> GameConfig {
    let path = path.as_ref();
    match load(path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path.display());
            config
        }
        Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No config at {}, using defaults", path.display());
            GameConfig::default()
        }
        Err(e) => {
            log::warn!("Ignoring config {}: {}", path.display(), e);
            GameConfig::default()
        }
    }
}
