// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so providers can cache and replay load failures)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid scope policy for token {token}: {reason}")]
    InvalidPolicy { token: String, reason: String },

    #[error("Invalid course: {0}")]
    InvalidCourse(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Category must not be empty")]
    EmptyCategory,

    #[error("Amount must be non-negative, got {value}")]
    NegativeAmount { value: i64 },

    // ========================================================================
    // Conflict Errors (409-level equivalent)
    // ========================================================================
    #[error("Duplicate course id {id}")]
    DuplicateCourse { id: u64 },

    #[error("Duplicate token id {id}")]
    DuplicateToken { id: u64 },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidPolicy { token, reason } => vec![
                format!("Token {} has a malformed scope: {}", token, reason),
                "Set exactly one of: universal = true, courses = [...], categories = [...]"
                    .into(),
            ],
            Self::InvalidCourse(msg) => vec![
                "Check the course record in your data file".into(),
                format!("Details: {}", msg),
            ],
            Self::EmptyCategory => vec![
                "Categories are matched exactly; use a non-empty name such as \"programming\""
                    .into(),
            ],
            Self::NegativeAmount { value } => vec![
                format!("{} is below zero", value),
                "Token values and course costs are whole, non-negative units".into(),
            ],
            Self::DuplicateCourse { id } => vec![
                format!("Course {} is defined more than once", id),
                "Course ids must be unique across all data files".into(),
            ],
            Self::DuplicateToken { id } => vec![
                format!("Token {} is defined more than once", id),
                "Token ids must be unique across all data files".into(),
            ],
            Self::InvalidToken(msg) => vec![
                "Check the token record in your data file".into(),
                format!("Details: {}", msg),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPolicy { .. }
            | Self::InvalidCourse(_)
            | Self::InvalidToken(_)
            | Self::EmptyCategory
            | Self::NegativeAmount { .. } => ErrorCategory::Validation,
            Self::DuplicateCourse { .. } | Self::DuplicateToken { .. } => ErrorCategory::Conflict,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}
