//! Repository trait for course data access.

use crate::domain::entities::{Course, CourseFilter, CoursePatch, NewCourse};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing courses and their enrollment lists.
///
/// Implementations must apply each write as a unit: the course row and its
/// enrollment rows are committed together or not at all. Student ids are
/// stored in the order given.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCourseRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Creates a new course with its students.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a referenced student does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError>;

    /// Finds a course by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError>;

    /// Lists courses matching every set filter, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self, filter: CourseFilter) -> Result<Vec<Course>, AppError>;

    /// Applies a partial update. A `Some` student list replaces the current one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course does not exist.
    /// Returns [`AppError::Validation`] if a referenced student does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, id: i64, patch: CoursePatch) -> Result<Course, AppError>;

    /// Deletes a course and its enrollment rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Counts all courses.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;
}
