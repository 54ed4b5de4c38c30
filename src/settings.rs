//! Host settings
//!
//! Defaults for the arena and difficulty, key bindings for the browser host,
//! and the tick cap for the headless demo. Stored as JSON.

#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH};
use crate::error::EngineError;
use crate::sim::{Difficulty, Direction};

/// Maps `KeyboardEvent.key` values to paddle directions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub up: String,
    pub down: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: "ArrowUp".to_string(),
            down: "ArrowDown".to_string(),
        }
    }
}

impl KeyBindings {
    /// Direction bound to `key`, if any
    pub fn direction_for(&self, key: &str) -> Option<Direction> {
        if key == self.up {
            Some(Direction::Up)
        } else if key == self.down {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty used when the host doesn't ask
    pub difficulty: Difficulty,

    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Input ===
    pub keys: KeyBindings,

    /// Tick cap for headless runs (a full match rarely needs 10k)
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
            keys: KeyBindings::default(),
            max_ticks: 20_000,
        }
    }
}

impl Settings {
    /// Env var naming a JSON settings file (native only)
    pub const PATH_ENV: &'static str = "PADDLE_DUEL_SETTINGS";

    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse host-supplied JSON, falling back to defaults
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }

    /// Read and parse a JSON settings file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &Path) -> Result<Self, EngineError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Like `load_from`, falling back to defaults on any error
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Could not load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from the file named by `PADDLE_DUEL_SETTINGS`, if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var_os(Self::PATH_ENV) {
            Some(path) => Self::load_or_default(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
