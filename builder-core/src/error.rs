//! Error types for builder operations.

use thiserror::Error;

/// Result type for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;

/// Errors that can occur in builder operations.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// Element not found in the element list.
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Invalid element operation.
    #[error("Invalid operation on element: {0}")]
    InvalidOperation(String),

    /// Malformed language code.
    #[error("Invalid language code: {0}")]
    InvalidLanguage(String),

    /// Language that has not been added to the editor.
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// External media URL without a recognized image or video extension.
    #[error("Please enter a valid image or video URL: {0}")]
    InvalidMediaUrl(String),

    /// Configuration or state serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
