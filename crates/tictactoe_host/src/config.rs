//! Host configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// What the host does with a jump past the end of the history.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum JumpPolicy {
    /// Report the error and keep the cursor where it is.
    #[default]
    Reject,
    /// Jump to the last recorded step instead.
    Clamp,
}

/// Configuration for the terminal host.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HostConfig {
    /// List moves oldest first.
    #[serde(default = "default_ascending")]
    #[getter(copy)]
    ascending: bool,

    /// Handling of out-of-range jumps.
    #[serde(default)]
    #[getter(copy)]
    out_of_range: JumpPolicy,
}

fn default_ascending() -> bool {
    true
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            ascending: default_ascending(),
            out_of_range: JumpPolicy::default(),
        }
    }
}

impl HostConfig {
    /// Creates a configuration.
    pub fn new(ascending: bool, out_of_range: JumpPolicy) -> Self {
        Self {
            ascending,
            out_of_range,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(ascending = config.ascending, out_of_range = %config.out_of_range, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the initial display order.
    pub fn with_ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_policy_parses_lowercase() {
        assert_eq!(JumpPolicy::from_str("clamp").unwrap(), JumpPolicy::Clamp);
        assert_eq!(JumpPolicy::Reject.to_string(), "reject");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: HostConfig = toml::from_str("").unwrap();
        assert_eq!(config, HostConfig::default());
        assert!(config.ascending());
        assert_eq!(config.out_of_range(), JumpPolicy::Reject);
    }
}
