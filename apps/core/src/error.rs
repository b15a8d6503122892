use std::io;
use thiserror::Error;

/// Crate-wide error type for operations allowed to fail (loading, validation).
///
/// Design intent analysis itself never returns this; see [`AnalysisError`].
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors, e.g. reading a knowledge base file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (e.g., invalid request or JSON).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., a malformed knowledge base).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Internal(s) => AppError::Internal(s.clone()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        AppError::Internal(format!("Analysis error: {}", err))
    }
}

/// Failures inside the analysis pipeline. Caught at the top of
/// `IntentAnalyzer::analyze` and replaced by the fallback intent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Neither the resolved page type nor the default page type has a catalog entry.
    #[error("no catalog entry for page type '{0}'")]
    UnknownPageType(String),

    /// The resolved page type entry lists no layouts.
    #[error("page type '{0}' has no layout options")]
    EmptyLayouts(String),

    /// The resolved page type entry lists no components.
    #[error("page type '{0}' has no components")]
    EmptyComponents(String),
}
