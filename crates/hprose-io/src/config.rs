// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Registry configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Registry configuration.
///
/// ```toml
/// extended_time = true
/// trace_resolution = false
/// initial_capacity = 256
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Install the extended date/time family when available.
    #[serde(default = "default_true")]
    pub extended_time: bool,

    /// Log classifications at debug instead of trace level.
    #[serde(default)]
    pub trace_resolution: bool,

    /// Initial capacity of the type map.
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

fn default_true() -> bool {
    true
}

fn default_initial_capacity() -> usize {
    256
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            extended_time: true,
            trace_resolution: false,
            initial_capacity: default_initial_capacity(),
        }
    }
}

impl RegistryConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::Invalid(
                "initial_capacity must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RegistryConfig::from_toml_str("").unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert!(config.extended_time);
        assert!(!config.trace_resolution);
        assert_eq!(config.initial_capacity, 256);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
extended_time = false
trace_resolution = true
initial_capacity = 64
"#;
        let config = RegistryConfig::from_toml_str(toml).unwrap();
        assert!(!config.extended_time);
        assert!(config.trace_resolution);
        assert_eq!(config.initial_capacity, 64);
    }

    #[test]
    fn test_invalid_capacity() {
        let err = RegistryConfig::from_toml_str("initial_capacity = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_and_unknown_keys() {
        assert!(matches!(
            RegistryConfig::from_toml_str("extended_time = \"yes\""),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            RegistryConfig::from_toml_str("bogus = 1"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "trace_resolution = true").unwrap();
        let config = RegistryConfig::from_file(file.path()).unwrap();
        assert!(config.trace_resolution);
        assert!(config.extended_time);

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            RegistryConfig::from_file(missing),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = RegistryConfig {
            initial_capacity: 32,
            ..RegistryConfig::default()
        };
        let text = config.to_toml().unwrap();
        assert_eq!(RegistryConfig::from_toml_str(&text).unwrap(), config);
    }
}
