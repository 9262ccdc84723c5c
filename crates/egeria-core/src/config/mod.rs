//! Configuration management for Egeria.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `egeria.toml` file
//! 3. User config `~/.config/egeria/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to render config: {0}")]
    RenderError(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mapping engine behaviour.
    pub mapping: MappingConfig,

    /// Type-definition registry configuration.
    pub registry: RegistryConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./egeria.toml` (project local)
    /// 2. `~/.config/egeria/config.toml` (user config)
    /// 3. Falls back to defaults
    ///
    /// Environment overrides apply in every case.
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            return Self::from_file(DEFAULT_CONFIG_FILE);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir
                .join(DEFAULT_USER_CONFIG_DIR)
                .join(DEFAULT_USER_CONFIG_FILE);
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(policy) = std::env::var(ENV_UNSUPPORTED_CATEGORIES) {
            self.mapping.unsupported_categories = policy.parse()?;
        }
        if let Ok(flag) = std::env::var(ENV_RESERIALIZE_EXTRAS) {
            self.mapping.reserialize_extras = flag.parse().map_err(|_| {
                ConfigError::Invalid(format!(
                    "{ENV_RESERIALIZE_EXTRAS} must be true or false, got '{flag}'"
                ))
            })?;
        }
        if let Ok(path) = std::env::var(ENV_TYPE_REGISTRY) {
            self.registry.type_file = Some(path);
        }
        if let Ok(level) = std::env::var(ENV_LOG) {
            self.logging.level = level;
        }
        Ok(())
    }

    /// Render this configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        Config::default().to_toml().unwrap_or_default()
    }
}

/// What the decoder does with ARRAY, STRUCT and unrecognised property
/// categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsupportedCategoryPolicy {
    /// Log a warning and leave the property out of the bean.
    #[default]
    Drop,
    /// Fail the decode with `UnsupportedPropertyCategory`.
    Reject,
}

impl FromStr for UnsupportedCategoryPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "drop" => Ok(Self::Drop),
            "reject" => Ok(Self::Reject),
            other => Err(ConfigError::Invalid(format!(
                "unsupported category policy must be 'drop' or 'reject', got '{other}'"
            ))),
        }
    }
}

/// Mapping engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Handling of property categories the beans cannot hold.
    pub unsupported_categories: UnsupportedCategoryPolicy,

    /// Write extra attributes and extra classifications back out on encode.
    pub reserialize_extras: bool,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            unsupported_categories: UnsupportedCategoryPolicy::default(),
            reserialize_extras: DEFAULT_RESERIALIZE_EXTRAS,
        }
    }
}

/// Type-definition registry configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// YAML file with extra type definitions, layered over the bundled ones.
    pub type_file: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. "warn" or "egeria_core=debug".
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.mapping.unsupported_categories,
            UnsupportedCategoryPolicy::Drop
        );
        assert_eq!(config.mapping.reserialize_extras, DEFAULT_RESERIALIZE_EXTRAS);
        assert!(config.registry.type_file.is_none());
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_config_to_toml() {
        let toml_str = Config::default_config_string();
        assert!(toml_str.contains("[mapping]"));
        assert!(toml_str.contains("[logging]"));
        assert!(toml_str.contains("unsupported_categories = \"drop\""));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "Reject".parse::<UnsupportedCategoryPolicy>().unwrap(),
            UnsupportedCategoryPolicy::Reject
        );
        assert_eq!(
            " drop ".parse::<UnsupportedCategoryPolicy>().unwrap(),
            UnsupportedCategoryPolicy::Drop
        );
        assert!("ignore".parse::<UnsupportedCategoryPolicy>().is_err());
    }
}
