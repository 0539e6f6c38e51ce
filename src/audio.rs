//! Best-effort sound effects and background music
//!
//! Gameplay talks to an [`AudioSink`] and ignores whatever it returns: a
//! missing file or a disabled device never changes what happens in the game.
//! - Native/WASM: [`MacroquadAudio`] plays files loaded at startup
//! - Tests/headless: [`NullAudio`] fails every call

use std::collections::HashMap;
use std::path::Path;
use macroquad::audio::{load_sound, play_sound, play_sound_once, stop_sound, PlaySoundParams, Sound};

/// Name of the looping background track
pub const BACKGROUND_TRACK: &str = "background";

/// Background music volume (effects play at full volume)
const MUSIC_VOLUME: f32 = 0.6;

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Jump,
    Hit,
    Win,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 3] = [SoundEffect::Jump, SoundEffect::Hit, SoundEffect::Win];

    /// Asset name (file stem under `sounds/`)
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump",
            SoundEffect::Hit => "hit",
            SoundEffect::Win => "win",
        }
    }
}

/// Why a sound did not play
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// The named asset was never loaded
    Missing(String),
    /// No audio backend
    Disabled,
}

impl std::fmt::Display for AudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudioError::Missing(name) => write!(f, "sound '{}' not loaded", name),
            AudioError::Disabled => write!(f, "audio disabled"),
        }
    }
}

impl std::error::Error for AudioError {}

/// Capability for playing sounds. Callers treat every failure as ignorable.
pub trait AudioSink {
    fn play_effect(&mut self, effect: SoundEffect) -> Result<(), AudioError>;
    fn play_track(&mut self, name: &str) -> Result<(), AudioError>;
    fn stop_track(&mut self) -> Result<(), AudioError>;
}

/// Sink with no backend: every call fails with [`AudioError::Disabled`]
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_effect(&mut self, _effect: SoundEffect) -> Result<(), AudioError> {
        Err(AudioError::Disabled)
    }

    fn play_track(&mut self, _name: &str) -> Result<(), AudioError> {
        Err(AudioError::Disabled)
    }

    fn stop_track(&mut self) -> Result<(), AudioError> {
        Err(AudioError::Disabled)
    }
}

/// Sounds played through macroquad's audio backend
pub struct MacroquadAudio {
    effects: HashMap<SoundEffect, Sound>,
    tracks: HashMap<String, Sound>,
    /// Track currently looping (if any)
    playing: Option<String>,
}

impl MacroquadAudio {
    /// Load `sounds/{jump,hit,win}.wav` and `music/background.ogg` from the asset dir.
    /// Files that fail to load are skipped with a warning.
    pub async fn load(asset_dir: &Path) -> Self {
        let mut effects = HashMap::new();
        for effect in SoundEffect::ALL {
            let path = asset_dir.join("sounds").join(format!("{}.wav", effect.name()));
            if let Some(sound) = load_optional(&path).await {
                effects.insert(effect, sound);
            }
        }

        let mut tracks = HashMap::new();
        let path = asset_dir.join("music").join(format!("{}.ogg", BACKGROUND_TRACK));
        if let Some(sound) = load_optional(&path).await {
            tracks.insert(BACKGROUND_TRACK.to_string(), sound);
        }

        log::info!("Loaded {} sound effects, {} music tracks", effects.len(), tracks.len());
        Self {
            effects,
            tracks,
            playing: None,
        }
    }
}

async fn load_optional(path: &Path) -> Option<Sound> {
    let path_str = path.to_string_lossy();
    match load_sound(&path_str).await {
        Ok(sound) => Some(sound),
        Err(e) => {
            log::warn!("Failed to load {}: {}", path_str, e);
            None
        }
    }
}

impl AudioSink for MacroquadAudio {
    fn play_effect(&mut self, effect: SoundEffect) -> Result<(), AudioError> {
        let sound = self
            .effects
            .get(&effect)
            .ok_or_else(|| AudioError::Missing(effect.name().to_string()))?;
        play_sound_once(sound);
        Ok(())
    }

    fn play_track(&mut self, name: &str) -> Result<(), AudioError> {
        if !self.tracks.contains_key(name) {
            return Err(AudioError::Missing(name.to_string()));
        }
        // Restarting a track that is already looping would stack two copies
        if self.playing.as_deref() == Some(name) {
            return Ok(());
        }
        self.stop_track()?;
        if let Some(sound) = self.tracks.get(name) {
            play_sound(sound, PlaySoundParams { looped: true, volume: MUSIC_VOLUME });
        }
        self.playing = Some(name.to_string());
        Ok(())
    }

    fn stop_track(&mut self) -> Result<(), AudioError> {
        if let Some(name) = self.playing.take() {
            if let Some(sound) = self.tracks.get(&name) {
                stop_sound(sound);
            }
        }
        Ok(())
    }
}
