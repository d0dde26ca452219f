use std::fmt;

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    value_objects::{Amount, Category, CourseId},
};

/// A course that tokens can be redeemed against.
///
/// Immutable once constructed. Identity is [`CourseId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    id: CourseId,
    category: Category,
    cost: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

impl Course {
    pub fn new(id: CourseId, category: Category, cost: Amount) -> Self {
        Self {
            id,
            category,
            cost,
            title: None,
        }
    }

    /// Build a course from raw record fields.
    pub fn try_from_raw(id: u64, category: &str, cost: i64) -> Result<Self, DomainError> {
        let category = Category::try_new(category)
            .map_err(|e| DomainError::InvalidCourse(format!("course {id}: {e}")))?;
        let cost = Amount::try_from_signed(cost)
            .map_err(|e| DomainError::InvalidCourse(format!("course {id}: {e}")))?;
        Ok(Self::new(CourseId::new(id), category, cost))
    }

    /// Attach a display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = (!title.trim().is_empty()).then_some(title);
        self
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn cost(&self) -> Amount {
        self.cost
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title {
            Some(title) => write!(f, "{} ({}, {}, cost {})", title, self.id, self.category, self.cost),
            None => write!(f, "course {} ({}, cost {})", self.id, self.category, self.cost),
        }
    }
}
