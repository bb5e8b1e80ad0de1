//! Harness configuration
//!
//! Settings shared by the assertion layer and the hosts built on it. Values
//! come from the environment or from a YAML file.

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Harness configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Log filter (e.g., "info,graphtest_store=debug")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit JSON logs instead of pretty ones
    #[serde(default)]
    pub enable_json_logging: bool,

    /// Keep a log of host-side assertion failures
    #[serde(default = "default_record_failures")]
    pub record_failures: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_record_failures() -> bool {
    true
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            enable_json_logging: false,
            record_failures: default_record_failures(),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

impl HarnessConfig {
    /// Load configuration from environment variables, falling back to defaults.
    ///
    /// Unparseable values are reported and ignored.
    pub fn load() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`HarnessConfig::load`], reading variables through `lookup`.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(filter) = lookup("GRAPHTEST_LOG_FILTER") {
            config.log_filter = filter;
        }

        if let Some(json) = lookup("GRAPHTEST_JSON_LOGS") {
            match parse_bool("GRAPHTEST_JSON_LOGS", &json) {
                Ok(enabled) => config.enable_json_logging = enabled,
                Err(e) => warn!("{}", e),
            }
        }

        if let Some(record) = lookup("GRAPHTEST_RECORD_FAILURES") {
            match parse_bool("GRAPHTEST_RECORD_FAILURES", &record) {
                Ok(enabled) => config.record_failures = enabled,
                Err(e) => warn!("{}", e),
            }
        }

        config
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}
