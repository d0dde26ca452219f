//! Catalog Service - course browsing operations.
//!
//! Read-only queries over the course catalog. Separated from
//! RedemptionService for single responsibility.

use crate::{
    application::ports::CourseCatalog,
    domain::{Category, Course, CourseId},
    error::RedeemResult,
};

/// Service for catalog queries.
pub struct CatalogService {
    catalog: Box<dyn CourseCatalog>,
}

impl CatalogService {
    /// Create a new catalog service.
    pub fn new(catalog: Box<dyn CourseCatalog>) -> Self {
        Self { catalog }
    }

    /// Get a course by id.
    pub fn course(&self, id: CourseId) -> RedeemResult<Course> {
        self.catalog.find_by_id(id)
    }

    /// Courses in one category.
    pub fn courses_in_category(&self, category: &Category) -> RedeemResult<Vec<Course>> {
        self.catalog.find_by_category(category)
    }

    /// List all courses.
    pub fn list(&self) -> RedeemResult<Vec<Course>> {
        self.catalog.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::ports::MockCourseCatalog,
        domain::Amount,
    };

    #[test]
    fn delegates_category_queries() {
        let design = Category::new("design");
        let course = Course::new(CourseId::new(3), design.clone(), Amount::new(150));

        let mut catalog = MockCourseCatalog::new();
        let expected = course.clone();
        catalog
            .expect_find_by_category()
            .withf(|c| c.as_str() == "design")
            .times(1)
            .returning(move |_| Ok(vec![expected.clone()]));

        let service = CatalogService::new(Box::new(catalog));

        assert_eq!(service.courses_in_category(&design).unwrap(), vec![course]);
    }
}
