//! Export error types
//!
//! Covers template rendering, serialization of the composition and writing
//! the rendered output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    TemplateError(String),

    /// Template not found
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ExportError::TemplateError(_) => "TEMPLATE_ERROR",
            ExportError::TemplateNotFound(_) => "TEMPLATE_NOT_FOUND",
            ExportError::SerializationError(_) => "SERIALIZATION_ERROR",
            ExportError::Io(_) => "IO_ERROR",
        }
    }
}

impl From<handlebars::RenderError> for ExportError {
    fn from(err: handlebars::RenderError) -> Self {
        ExportError::TemplateError(err.to_string())
    }
}
