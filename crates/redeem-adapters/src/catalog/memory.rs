//! In-memory course catalog.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use redeem_core::{
    application::{ApplicationError, ports::CourseCatalog},
    domain::{Category, Course, CourseId, DomainError, DomainValidator as validator},
    error::RedeemResult,
};

use crate::sample_data;

/// Thread-safe in-memory catalog, ordered by course id.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<BTreeMap<CourseId, Course>>>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Create a catalog from a list of courses. Duplicate ids are rejected.
    pub fn from_courses(courses: Vec<Course>) -> RedeemResult<Self> {
        validator::validate_catalog(&courses)?;
        let catalog = Self::new();
        {
            let mut inner = catalog
                .inner
                .write()
                .map_err(|_| ApplicationError::StoreLockError)?;
            inner.extend(courses.into_iter().map(|c| (c.id(), c)));
        }
        Ok(catalog)
    }

    /// Create a catalog with the sample courses loaded.
    pub fn with_sample() -> RedeemResult<Self> {
        Self::from_courses(sample_data::courses()?)
    }

    /// Add a course. Fails if the id is already taken.
    pub fn insert(&self, course: Course) -> RedeemResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.contains_key(&course.id()) {
            return Err(DomainError::DuplicateCourse {
                id: course.id().get(),
            }
            .into());
        }

        inner.insert(course.id(), course);
        Ok(())
    }

    /// Get the number of courses.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseCatalog for InMemoryCatalog {
    fn find_by_id(&self, id: CourseId) -> RedeemResult<Course> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .get(&id)
            .cloned()
            .ok_or_else(|| ApplicationError::CourseNotFound { id }.into())
    }

    fn find_by_category(&self, category: &Category) -> RedeemResult<Vec<Course>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner
            .values()
            .filter(|c| c.category() == category)
            .cloned()
            .collect())
    }

    fn list(&self) -> RedeemResult<Vec<Course>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.values().cloned().collect())
    }
}
