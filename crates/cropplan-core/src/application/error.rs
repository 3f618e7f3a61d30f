//! Application layer errors.
//!
//! Failures while obtaining or querying the plant dataset. Request
//! validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading or querying plant data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A dataset row failed validation. `row` is the 1-based data row.
    #[error("Invalid dataset row {row}: {reason}")]
    DatasetInvalid { row: usize, reason: String },

    /// The dataset could not be read or parsed at all.
    #[error("Dataset unavailable at {path}: {reason}")]
    DatasetUnavailable { path: PathBuf, reason: String },

    /// Name lookup found nothing.
    #[error("Plant '{name}' not found")]
    PlantNotFound { name: String },

    /// Catalog access failed (lock poisoned).
    #[error("Plant catalog error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DatasetInvalid { row, .. } => vec![
                format!("Fix data row {} of the dataset", row),
                "Name, Category and Season must not be blank".into(),
            ],
            Self::DatasetUnavailable { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check the path passed with --dataset or CROPPLAN_DATASET".into(),
                "Supported formats: .csv, .toml and .json".into(),
            ],
            Self::PlantNotFound { name } => vec![
                format!("No plant named '{}' in the dataset", name),
                "Try: cropplan list to see available plants".into(),
            ],
            Self::StoreLockError => vec![
                "The plant catalog is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DatasetInvalid { .. } => ErrorCategory::InvalidData,
            Self::DatasetUnavailable { .. } => ErrorCategory::Configuration,
            Self::PlantNotFound { .. } => ErrorCategory::NotFound,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
