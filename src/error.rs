//! Error types.
//!
//! The per-tick logic has no failure paths; only loading the persisted
//! configuration can fail.

use std::path::PathBuf;

/// Errors raised while loading [`HudConfig`](crate::config::HudConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
