//! Export and import error types.

use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while exporting a template.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing an export file failed.
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;

/// Errors that can occur while importing a template.
///
/// The `Display` text is meant to be shown to the user as-is.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The text is not valid JSON or not shaped like template records.
    #[error("Error parsing JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The text parsed but produced no elements.
    #[error("Invalid data format. Please check your input.")]
    InvalidFormat,

    /// The file extension is not a template format.
    #[error("Unsupported template file: {0}")]
    UnsupportedFile(String),

    /// Reading the template file failed.
    #[error("Failed to read template: {0}")]
    Io(#[from] std::io::Error),
}
