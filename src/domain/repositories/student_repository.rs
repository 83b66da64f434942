//! Repository trait for student data access.

use crate::domain::entities::{NewStudent, Student};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing students.
///
/// Deleting a student removes it from every course it was enrolled in.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Creates a new student.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_student: NewStudent) -> Result<Student, AppError>;

    /// Finds a student by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError>;

    /// Lists all students ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<Student>, AppError>;

    /// Deletes a student.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Returns the subset of `ids` that has no matching student, in input order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_missing(&self, ids: &[i64]) -> Result<Vec<i64>, AppError>;

    /// Counts all students.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;
}
