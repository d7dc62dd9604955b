//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::Player as Mark;
use tracing::{debug, info, instrument};

/// Which side makes the opening move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human opens as X.
    #[default]
    #[display("human")]
    Human,
    /// The computer opens as O.
    #[display("computer")]
    Computer,
}

impl FirstPlayer {
    /// Mark of the side that moves first.
    pub fn mark(self) -> Mark {
        match self {
            FirstPlayer::Human => Mark::X,
            FirstPlayer::Computer => Mark::O,
        }
    }
}

/// Configuration for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Side that makes the opening move.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Tracing filter used when `RUST_LOG` is not set (e.g. "debug").
    #[serde(default = "default_log_filter")]
    #[setters(into)]
    log_filter: String,
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(first_player = %config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, falling back to defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.first_player(), FirstPlayer::Human);
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_parse_lowercase_first_player() {
        let config: GameConfig = toml::from_str("first_player = \"computer\"").unwrap();
        assert_eq!(*config.first_player(), FirstPlayer::Computer);
        assert_eq!(config.first_player().mark(), Mark::O);
    }

    #[test]
    fn test_setters_override() {
        let config = GameConfig::default()
            .with_first_player(FirstPlayer::Computer)
            .with_log_filter("debug");
        assert_eq!(*config.first_player(), FirstPlayer::Computer);
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_config_error_records_location() {
        let err = ConfigError::new("boom");
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
