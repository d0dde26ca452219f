//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `redeem-adapters` crate provides implementations.

use crate::domain::{Category, Course, CourseId, Token, UserId};
use crate::error::RedeemResult;

/// Port for course catalog lookups.
///
/// Implemented by:
/// - `redeem_adapters::catalog::InMemoryCatalog`
///
/// Courses handed out are fully validated; callers never see a half-built one.
#[cfg_attr(test, mockall::automock)]
pub trait CourseCatalog: Send + Sync {
    /// Get a course by id.
    ///
    /// Returns `ApplicationError::CourseNotFound` when the id is unknown.
    fn find_by_id(&self, id: CourseId) -> RedeemResult<Course>;

    /// All courses in a category, ordered by id.
    fn find_by_category(&self, category: &Category) -> RedeemResult<Vec<Course>>;

    /// Every course, ordered by id.
    fn list(&self) -> RedeemResult<Vec<Course>>;
}

/// Port for a user's token holdings.
///
/// Implemented by:
/// - `redeem_adapters::inventory::InMemoryInventory`
#[cfg_attr(test, mockall::automock)]
pub trait TokenInventory: Send + Sync {
    /// Tokens held by `user`, in the order they were granted.
    ///
    /// An unknown user holds no tokens; that is not an error.
    fn find_for_user(&self, user: UserId) -> RedeemResult<Vec<Token>>;
}
