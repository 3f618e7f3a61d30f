//! Unified error handling for the planner core.
//!
//! Wraps domain and application errors in one type that carries
//! user-actionable suggestions and a display category.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for cropplan-core operations.
#[derive(Debug, Error, Clone)]
pub enum CropPlanError {
    /// Invalid request or malformed record.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Dataset, lookup or store failures.
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CropPlanError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Run: cropplan config path to locate the config file".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in cropplan".into(),
                "Re-run with -vvv and include the log in your report".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::InvalidData => ErrorCategory::InvalidData,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::StoreLockError))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    InvalidData,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type CropPlanResult<T> = Result<T, CropPlanError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    fn context(self, msg: impl Into<String>) -> CropPlanResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> CropPlanResult<T> {
        self.map_err(|e| CropPlanError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}
