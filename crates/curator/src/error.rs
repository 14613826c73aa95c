//! Error types for the curator library.

use thiserror::Error;

/// Main error type for curator operations.
///
/// The curation pipeline itself never fails: inadmissible articles are
/// dropped, not reported. Every variant here originates in a library
/// (storage) collaborator or in configuration.
#[derive(Debug, Error)]
pub enum CuratorError {
    /// A library operation (persist, index refresh, title listing) failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A library snapshot could not be read or written.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for curator operations.
pub type Result<T> = std::result::Result<T, CuratorError>;
