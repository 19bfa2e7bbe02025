//! Error types for editor configuration output.

use thiserror::Error;

/// Errors that can occur while building editor configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// Stored styles could not be read back, or submitted text was invalid.
    #[error(transparent)]
    Style(#[from] list_style::Error),

    /// YAML serialization error.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for editor configuration operations.
pub type Result<T> = std::result::Result<T, Error>;
