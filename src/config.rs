//! Engine configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a [`GameEngine`](crate::GameEngine).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of snapshots kept for undo (at least 1).
    #[serde(default = "default_history_capacity")]
    history_capacity: usize,

    /// Keep the empty-board snapshot when the history overflows.
    ///
    /// Off by default: the oldest snapshot is evicted, whatever it is.
    #[serde(default)]
    pin_initial_snapshot: bool,
}

fn default_history_capacity() -> usize {
    4
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            pin_initial_snapshot: false,
        }
    }
}

impl EngineConfig {
    /// Creates a validated configuration.
    #[instrument]
    pub fn new(history_capacity: usize, pin_initial_snapshot: bool) -> Result<Self, ConfigError> {
        let config = Self {
            history_capacity,
            pin_initial_snapshot,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            history_capacity = config.history_capacity,
            pin_initial_snapshot = config.pin_initial_snapshot,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    #[track_caller]
    fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::new(
                "history_capacity must be at least 1".to_string(),
            ));
        }
        if self.pin_initial_snapshot && self.history_capacity < 2 {
            return Err(ConfigError::new(
                "pin_initial_snapshot needs history_capacity of at least 2".to_string(),
            ));
        }
        Ok(())
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
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
