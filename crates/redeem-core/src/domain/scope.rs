//! Token redemption scope.
//!
//! A [`ScopePolicy`] answers one structural question: does this token's scope
//! cover this course? Price plays no part here; see `eligibility` for that.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::Course,
    error::DomainError,
    value_objects::{Category, CourseId},
};

/// Where a token may be redeemed.
///
/// Exactly one case is active. Empty sets are allowed and never match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum ScopePolicy {
    /// Any course.
    Universal,
    /// Only the listed courses.
    ByCourseIds(BTreeSet<CourseId>),
    /// Any course in one of the listed categories.
    ByCategories(BTreeSet<Category>),
}

impl ScopePolicy {
    pub fn universal() -> Self {
        Self::Universal
    }

    pub fn courses(ids: impl IntoIterator<Item = impl Into<CourseId>>) -> Self {
        Self::ByCourseIds(ids.into_iter().map(Into::into).collect())
    }

    pub fn categories(categories: impl IntoIterator<Item = Category>) -> Self {
        Self::ByCategories(categories.into_iter().collect())
    }

    /// Build a policy from the flag-and-lists shape used by data records.
    ///
    /// Exactly one of `universal == true`, `course_ids.is_some()` or
    /// `categories.is_some()` must hold; anything else is
    /// [`DomainError::InvalidPolicy`]. `token` only labels the error.
    pub fn from_parts(
        token: impl fmt::Display,
        universal: bool,
        course_ids: Option<Vec<CourseId>>,
        categories: Option<Vec<Category>>,
    ) -> Result<Self, DomainError> {
        match (universal, course_ids, categories) {
            (true, None, None) => Ok(Self::Universal),
            (false, Some(ids), None) => Ok(Self::ByCourseIds(ids.into_iter().collect())),
            (false, None, Some(cats)) => Ok(Self::ByCategories(cats.into_iter().collect())),
            (false, None, None) => Err(DomainError::InvalidPolicy {
                token: token.to_string(),
                reason: "no scope given".into(),
            }),
            _ => Err(DomainError::InvalidPolicy {
                token: token.to_string(),
                reason: "more than one scope given".into(),
            }),
        }
    }

    /// Whether this scope covers `course`.
    pub fn matches(&self, course: &Course) -> bool {
        match self {
            Self::Universal => true,
            Self::ByCourseIds(ids) => ids.contains(&course.id()),
            Self::ByCategories(categories) => categories.contains(course.category()),
        }
    }

    /// A `ByCourseIds` or `ByCategories` policy with nothing in it.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Universal => false,
            Self::ByCourseIds(ids) => ids.is_empty(),
            Self::ByCategories(categories) => categories.is_empty(),
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Universal => "universal",
            Self::ByCourseIds(_) => "courses",
            Self::ByCategories(_) => "categories",
        }
    }
}

impl fmt::Display for ScopePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Universal => f.write_str("all courses"),
            Self::ByCourseIds(ids) => {
                let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
                write!(f, "courses [{}]", ids.join(", "))
            }
            Self::ByCategories(categories) => {
                let names: Vec<&str> = categories.iter().map(Category::as_str).collect();
                write!(f, "categories [{}]", names.join(", "))
            }
        }
    }
}
