//! Error types for the data service
//!
//! Data operations never fail: a missing record is `None` or an empty
//! slice. Errors only come from building the service (seed validation) and
//! loading its configuration.

use gsc_model::SeedError;
use std::path::PathBuf;

/// Service construction errors
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Seed dataset failed validation
    #[error("seed error: {0}")]
    Seed(#[from] SeedError),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for the expected shape
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
