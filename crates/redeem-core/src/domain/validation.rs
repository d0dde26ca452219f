use std::collections::HashSet;

use tracing::warn;

use crate::domain::{
    entities::{Course, Token},
    error::DomainError,
};

/// Centralized domain validation.
///
/// Checks that span more than one entity live here, not on the entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Course ids must be unique within a catalog.
    pub fn validate_catalog(courses: &[Course]) -> Result<(), DomainError> {
        let mut seen = HashSet::with_capacity(courses.len());
        for course in courses {
            if !seen.insert(course.id()) {
                return Err(DomainError::DuplicateCourse {
                    id: course.id().get(),
                });
            }
        }
        Ok(())
    }

    /// Token ids must be unique within an inventory.
    ///
    /// Tokens whose scope is an empty set are legal but can never be spent;
    /// they are logged, not rejected.
    pub fn validate_inventory<'a>(
        tokens: impl IntoIterator<Item = &'a Token>,
    ) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for token in tokens {
            if !seen.insert(token.id()) {
                return Err(DomainError::DuplicateToken {
                    id: token.id().get(),
                });
            }
            if token.scope().is_empty() {
                warn!(token = %token.id(), scope = token.scope().kind(), "token scope is empty; it can never be redeemed");
            }
        }
        Ok(())
    }
}
