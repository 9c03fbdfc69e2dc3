use std::io;

use thiserror::Error;

/// Library-wide error type for docfill operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A required interactive input was left empty.
    #[error("Missing {0}")]
    MissingInput(String),

    /// Template file does not exist at the given path.
    #[error("Template file not found: {0}")]
    TemplateNotFound(String),

    /// Template could not be read as a document package.
    #[error("Failed to read template: {0}")]
    Template(String),

    /// Substitution or saving of the output document failed.
    #[error("Failed to render document: {0}")]
    Render(String),

    /// No credential in any of the configured sources.
    #[error("No Gemini API key provided and {0} is not set")]
    CredentialMissing(String),

    /// Gemini API request failed.
    #[error("Gemini API error: {message}")]
    GeminiApiError { message: String, status: Option<u16> },

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io_err) => AppError::Io(io_err),
            other => AppError::Template(other.to_string()),
        }
    }
}
