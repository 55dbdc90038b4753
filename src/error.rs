//! Error types for configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving, reading, or merging configuration.
///
/// Every variant is fatal to the `register` call that produced it; no
/// partial or degraded configuration is ever returned.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be opened or read.
    #[error("unable to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid JSON.
    #[error("unable to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file parsed, but its top-level value is not an object.
    #[error("config file {} does not contain a top-level mapping", path.display())]
    Schema { path: PathBuf },

    /// No primary file, no default, no mode file.
    #[error("config file {} is missing, create it to configure the application", path.display())]
    Missing { path: PathBuf },
}

impl ConfigError {
    /// The config file path this error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConfigError::Io { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Schema { path }
            | ConfigError::Missing { path } => path,
        }
    }
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
