//! Error types for storage operations

use crate::pdf::PdfError;
use crate::templates::TemplateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("PDF export error: {0}")]
    Pdf(#[from] PdfError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
