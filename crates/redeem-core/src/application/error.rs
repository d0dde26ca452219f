//! Application layer errors.
//!
//! These errors represent failures in orchestration and data access, not
//! business rules. Business rule errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::CourseId;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The catalog has no course with this id.
    #[error("Course {id} not found")]
    CourseNotFound { id: CourseId },

    /// A data source could not be read or parsed.
    #[error("Failed to load data from {path}: {reason}")]
    DataSource { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Data store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CourseNotFound { id } => vec![
                format!("No course with id {} exists in the catalog", id),
                "Try: redeem courses to see available courses".into(),
            ],
            Self::DataSource { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check that the file exists and is valid TOML or JSON".into(),
                "Or omit --data to use the built-in sample catalog".into(),
            ],
            Self::StoreLockError => vec![
                "The data store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CourseNotFound { .. } => ErrorCategory::NotFound,
            Self::DataSource { .. } => ErrorCategory::Configuration,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
