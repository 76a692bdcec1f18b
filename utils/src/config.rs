//! Node configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use meshvote_types::MeshParams;

use crate::logging::{init_logging, parse_filter, LogFormat};
use crate::ConfigError;

/// Configuration for a node handling ballots and proposals.
///
/// Can be loaded from a TOML file via [`MeshConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). Every field has a default, so an
/// empty file is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshConfig {
    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error", or a
    /// full directive list.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Mesh parameters.
    #[serde(default)]
    pub params: MeshParams,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl MeshConfig {
    /// Load and validate configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.params
            .validate()
            .map_err(|reason| ConfigError::Invalid {
                field: "params",
                reason,
            })?;
        parse_filter(&self.log_level)?;
        Ok(())
    }

    /// Install the global subscriber described by this configuration.
    pub fn init_logging(&self) -> Result<(), ConfigError> {
        init_logging(self.log_format, &self.log_level)
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            params: MeshParams::default(),
        }
    }
}
