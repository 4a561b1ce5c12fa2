//! Configuration module.

mod settings;

pub use settings::{Config, GraphBackendType, GraphConfig, LanguageConfig, LoaderConfig};
