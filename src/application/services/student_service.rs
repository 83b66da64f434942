//! Student management service.

use chrono::NaiveDate;
use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{NewStudent, Student};
use crate::domain::repositories::StudentRepository;
use crate::error::AppError;

/// Service for student records.
pub struct StudentService {
    repository: Arc<dyn StudentRepository>,
}

impl StudentService {
    /// Creates a new student service.
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    /// Lists all students.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a student by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_student(&self, id: i64) -> Result<Student, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Student not found", json!({ "id": id })))
    }

    /// Creates a student.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_student(
        &self,
        name: String,
        birth_date: NaiveDate,
    ) -> Result<Student, AppError> {
        let student = self
            .repository
            .create(NewStudent { name, birth_date })
            .await?;
        tracing::info!(student_id = student.id, "Student created");
        Ok(student)
    }

    /// Deletes a student and drops it from every course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_student(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(student_id = id, "Student deleted");
        Ok(())
    }

    /// Counts all students.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count_students(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
