//! Configuration settings for wortschatz.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub graph: GraphConfig,
    pub loader: LoaderConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::ReadFile)?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations or use defaults.
    pub fn load() -> Result<Self> {
        let config_paths = [
            PathBuf::from("wortschatz.toml"),
            dirs::config_dir()
                .map(|p| p.join("wortschatz/config.toml"))
                .unwrap_or_default(),
            dirs::home_dir()
                .map(|p| p.join(".wortschatz/config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.graph.identity_key.is_empty() {
            return Err(ConfigError::MissingField("graph.identity_key".to_string()).into());
        }

        for language in &self.loader.languages {
            if language.name.is_empty() {
                return Err(ConfigError::Invalid("language name must not be empty".to_string()).into());
            }
            if language.path.is_empty() {
                return Err(ConfigError::MissingField(format!(
                    "loader.languages.path for '{}'",
                    language.name
                ))
                .into());
            }
        }

        Ok(())
    }
}

/// Graph store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Backend type: currently only "memory"
    pub backend: GraphBackendType,
    /// Attribute name used as the unique node identity property
    pub identity_key: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            backend: GraphBackendType::Memory,
            identity_key: "name".to_string(),
        }
    }
}

/// Graph backend type enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphBackendType {
    Memory,
}

/// Loader configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Languages loaded by `load-all`
    pub languages: Vec<LanguageConfig>,
}

/// One configured language source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Language label attached to every entry of this collection
    pub name: String,
    /// Path to the YAML vocabulary file
    pub path: String,
}
