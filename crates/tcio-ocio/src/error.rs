//! Error types for config loading.

use thiserror::Error;

/// Result type for config operations.
pub type OcioResult<T> = Result<T, OcioError>;

/// Errors that can occur while loading a config.
#[derive(Debug, Error)]
pub enum OcioError {
    /// I/O error reading the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
