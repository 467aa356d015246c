//! Batch analysis configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// A named position to analyse.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct PositionEntry {
    /// Label printed next to the result.
    name: String,
    /// Board text, e.g. `XX./OO./...`.
    board: String,
}

/// Positions to analyse in one run.
#[derive(Debug, Clone, Default, Getters, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Positions in file order.
    #[serde(default, rename = "position")]
    positions: Vec<PositionEntry>,
}

impl BatchConfig {
    /// Loads a batch from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading batch file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read batch file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(positions = config.positions.len(), "Batch loaded");
        Ok(config)
    }

    /// Parses a batch from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse batch file: {}", e)))
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
