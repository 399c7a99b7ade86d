//! Game configuration
//!
//! Tunable timings and attempt settings, read from a TOML file. Every key is
//! optional:
//!
//! ```toml
//! shuffle_duration_secs = 0.5
//! shuffle_cooldown_secs = 0.75
//! incorrect_feedback_secs = 0.5
//! initial_attempts = 0
//! dev_mode = false
//! ```

use crate::game::ShuffleTimings;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// On-disk shape of the configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    shuffle_duration_secs: f32,
    shuffle_cooldown_secs: f32,
    incorrect_feedback_secs: f32,
    initial_attempts: u32,
    dev_mode: bool,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            shuffle_duration_secs: 0.5,
            shuffle_cooldown_secs: 0.75,
            incorrect_feedback_secs: 0.5,
            initial_attempts: 0,
            dev_mode: false,
        }
    }
}

/// Error type for configuration parsing
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    InvalidDuration { key: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "Invalid configuration: {msg}"),
            Self::InvalidDuration { key, value } => {
                write!(f, "'{key}' must be a non-negative number of seconds, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Durations for every timed behavior of the puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub shuffle_duration: Duration,
    pub shuffle_cooldown: Duration,
    pub incorrect_feedback: Duration,
}

impl Timings {
    #[must_use]
    pub const fn shuffle(&self) -> ShuffleTimings {
        ShuffleTimings {
            duration: self.shuffle_duration,
            cooldown: self.shuffle_cooldown,
        }
    }

    /// Long enough for every pending timer to run out
    #[must_use]
    pub fn longest(&self) -> Duration {
        self.shuffle_duration
            .max(self.shuffle_cooldown)
            .max(self.incorrect_feedback)
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            shuffle_duration: Duration::from_millis(500),
            shuffle_cooldown: Duration::from_millis(750),
            incorrect_feedback: Duration::from_millis(500),
        }
    }
}

/// Validated game configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub timings: Timings,
    pub initial_attempts: u32,
    /// Developer mode: answer panel available, quitting only ends the session
    pub dev_mode: bool,
}

impl GameConfig {
    /// Parse a TOML document
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on malformed TOML, unknown keys, or durations
    /// that are negative or not finite.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.message().to_string()))?;
        Self::try_from(raw)
    }

    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }
}

impl TryFrom<RawConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let seconds = |key: &'static str, value: f32| {
            Duration::try_from_secs_f32(value).map_err(|_| ConfigError::InvalidDuration { key, value })
        };

        Ok(Self {
            timings: Timings {
                shuffle_duration: seconds("shuffle_duration_secs", raw.shuffle_duration_secs)?,
                shuffle_cooldown: seconds("shuffle_cooldown_secs", raw.shuffle_cooldown_secs)?,
                incorrect_feedback: seconds(
                    "incorrect_feedback_secs",
                    raw.incorrect_feedback_secs,
                )?,
            },
            initial_attempts: raw.initial_attempts,
            dev_mode: raw.dev_mode,
        })
    }
}
