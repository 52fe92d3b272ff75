//! Driver configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use quantum_tictactoe::Piece;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "qttt.toml";

/// Configuration for the `qttt` driver.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct QtttConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Print JSON snapshots instead of text boards.
    #[serde(default)]
    json: bool,

    /// Seat whose redacted view is printed. `None` prints the full state.
    #[serde(default)]
    viewer: Option<Piece>,

    /// Stop a replay at the first rejected command.
    #[serde(default)]
    strict: bool,
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for QtttConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json: false,
            viewer: None,
            strict: false,
        }
    }
}

impl QtttConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_filter = %config.log_filter, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the explicit file if given, else [`DEFAULT_CONFIG_FILE`] if it
    /// exists, else the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
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
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
