//! Error types for wortschatz.

use thiserror::Error;

/// Main error type for wortschatz operations.
#[derive(Error, Debug)]
pub enum WortschatzError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Vocabulary normalization errors. These mark malformed hand-authored input
/// and are fatal for the load that hit them.
#[derive(Error, Debug)]
pub enum VocabularyError {
    #[error("'{term}' does not contain a '{field}' field, maybe there is a typo")]
    MissingField { term: String, field: &'static str },

    #[error("Malformed declension: {0}")]
    MalformedDeclension(String),
}

/// Graph store errors.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Node is missing the identity attribute '{0}'")]
    MissingIdentity(String),

    #[error("Node not found: {0}")]
    NodeNotFound(String),
}

/// Result type alias for wortschatz operations.
pub type Result<T> = std::result::Result<T, WortschatzError>;
