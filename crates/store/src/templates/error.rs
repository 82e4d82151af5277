//! Error types for template operations

use thiserror::Error;

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template already exists
    #[error("Template already exists: {0}")]
    AlreadyExists(String),

    /// Id that cannot name a stored document
    #[error("Invalid template ID: {0}")]
    InvalidId(String),

    /// Remote document store failure
    #[error("Remote store error: {0}")]
    Remote(String),
}

/// Result type for template operations
pub type TemplateResult<T> = std::result::Result<T, TemplateError>;
