use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, LevelFilter};
use ringlight_lib::{AnimationConfig, GameConfig};
use serde::{Deserialize, Serialize};

/// Configurable log level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    #[must_use]
    pub const fn as_level_filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
        }
    }
}

/// Simulator settings, read from a JSON file. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimConfig {
    /// Delay between frames (ms)
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Output brightness (0-255), applied after gamma correction
    #[serde(default = "default_brightness")]
    pub brightness: u8,
    #[serde(default)]
    pub log_level: LogLevel,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub game: GameConfig,
}

const fn default_tick_ms() -> u64 {
    20
}

const fn default_brightness() -> u8 {
    255
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            brightness: default_brightness(),
            log_level: LogLevel::default(),
            animation: AnimationConfig::default(),
            game: GameConfig::default(),
        }
    }
}

impl SimConfig {
    /// Load from `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        debug!("Loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
