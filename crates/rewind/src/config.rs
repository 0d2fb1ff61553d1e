//! Driver configuration: TOML file, environment, then command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::SortOrder;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable overriding the configured board size.
pub const BOARD_SIZE_ENV: &str = "REWIND_BOARD_SIZE";

/// Settings for a play or replay session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RewindConfig {
    /// Board side length.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Initial move-list order.
    #[serde(default)]
    sort_order: SortOrder,
}

fn default_board_size() -> usize {
    3
}

impl Default for RewindConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            sort_order: SortOrder::default(),
        }
    }
}

impl RewindConfig {
    /// Creates a configuration from explicit values.
    pub fn new(board_size: usize, sort_order: SortOrder) -> Self {
        Self {
            board_size,
            sort_order,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(board_size = config.board_size, "Config loaded");
        Ok(config)
    }

    /// Loads the file at `path` if it exists, otherwise the defaults, then
    /// applies [`BOARD_SIZE_ENV`] from the process environment.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let env_size = std::env::var(BOARD_SIZE_ENV).ok();
        Self::load_with(path, env_size.as_deref())
    }

    /// Loads the file at `path` if it exists, otherwise the defaults.
    ///
    /// `env_size` is the raw [`BOARD_SIZE_ENV`] value and beats the file.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_with(path: &Path, env_size: Option<&str>) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            Self::from_file(path)?
        } else {
            info!("Config file not found, using defaults");
            Self::default()
        };

        match env_size {
            Some(raw) => config.with_board_size_override(raw),
            None => Ok(config),
        }
    }

    /// Applies a `--size` flag, which beats both the file and the environment.
    pub fn with_size_flag(self, size: Option<usize>) -> Self {
        match size {
            Some(size) => self.with_board_size(size),
            None => self,
        }
    }

    /// Replaces the board size with one parsed from `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `raw` is not a non-negative integer.
    #[instrument(skip(self))]
    pub fn with_board_size_override(self, raw: &str) -> Result<Self, ConfigError> {
        let board_size = raw.trim().parse::<usize>().map_err(|e| {
            ConfigError::new(format!("Invalid {} value {:?}: {}", BOARD_SIZE_ENV, raw, e))
        })?;
        debug!(board_size, "Board size overridden");
        Ok(self.with_board_size(board_size))
    }

    /// Replaces the board size.
    pub fn with_board_size(self, board_size: usize) -> Self {
        Self { board_size, ..self }
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
    /// Creates a new configuration error at the caller's location.
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
        let config = RewindConfig::default();
        assert_eq!(*config.board_size(), 3);
        assert_eq!(*config.sort_order(), SortOrder::Ascending);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: RewindConfig = toml::from_str("sort_order = \"descending\"").unwrap();
        assert_eq!(*config.board_size(), 3);
        assert_eq!(*config.sort_order(), SortOrder::Descending);
    }

    #[test]
    fn test_board_size_override() {
        let config = RewindConfig::default().with_board_size_override(" 5 ").unwrap();
        assert_eq!(*config.board_size(), 5);
    }

    #[test]
    fn test_non_integer_override_rejected() {
        let err = RewindConfig::default().with_board_size_override("three").unwrap_err();
        assert!(err.message.contains(BOARD_SIZE_ENV));
        assert!(err.file.ends_with("config.rs"));
    }
}
