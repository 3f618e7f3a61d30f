// ============================================================================
// domain/error.rs - PLANNING DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// The planning algorithm itself never fails: an impossible garden is the
/// empty plan, not an error. These variants only guard the boundary where
/// raw user input becomes a [`PlanRequest`](crate::domain::PlanRequest) or a
/// raw dataset row becomes a [`PlantRecord`](crate::domain::PlantRecord).
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid plan request: {0}")]
    InvalidRequest(String),

    #[error("Unknown season '{0}'")]
    UnknownSeason(String),

    #[error("Invalid plant record: {0}")]
    InvalidRecord(String),

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidRequest(msg) => vec![
                "Check the planning parameters".into(),
                format!("Details: {}", msg),
                "Area must be between 0 and 1000000 m², max categories at least 1".into(),
            ],
            Self::UnknownSeason(season) => vec![
                format!("'{}' is not a season", season),
                "Supported seasons: spring, summer, autumn (or fall), winter".into(),
            ],
            Self::InvalidRecord(msg) => vec![
                "The plant dataset contains a malformed row".into(),
                format!("Details: {}", msg),
            ],
            Self::MissingRequiredField { field } => {
                vec![format!("Provide a value for '{}'", field)]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidRequest(_) | Self::UnknownSeason(_) => ErrorCategory::Validation,
            Self::InvalidRecord(_) | Self::MissingRequiredField { .. } => {
                ErrorCategory::InvalidData
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    InvalidData,
}
