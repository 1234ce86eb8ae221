//! Error types for the liftplan_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for liftplan_core operations.
///
/// Only configuration-level problems are surfaced as errors; per-slot and
/// per-exercise shortfalls are absorbed locally and reflected as reduced
/// program content instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Program request cannot be satisfied as specified
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Catalog validation error
    #[error("catalog validation error: {0}")]
    CatalogValidation(String),

    /// Engine configuration error
    #[error("configuration error: {0}")]
    Config(String),
}
