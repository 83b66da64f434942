//! Course management service.

use serde_json::json;
use std::sync::Arc;

use crate::domain::enrollment::{EnrollmentLimit, dedup_students};
use crate::domain::entities::{Course, CourseFilter, CoursePatch, NewCourse};
use crate::domain::repositories::{CourseRepository, StudentRepository};
use crate::error::AppError;

/// Service for course CRUD with enrollment rules.
///
/// Every write that carries a student list goes through the same checks,
/// in order:
/// 1. The list size, as sent, is checked against the [`EnrollmentLimit`]
/// 2. Repeated ids are collapsed
/// 3. Every id must refer to an existing student
///
/// Nothing is written if any check fails.
pub struct CourseService {
    courses: Arc<dyn CourseRepository>,
    students: Arc<dyn StudentRepository>,
    limit: EnrollmentLimit,
}

impl CourseService {
    /// Creates a new course service.
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        students: Arc<dyn StudentRepository>,
        limit: EnrollmentLimit,
    ) -> Self {
        Self {
            courses,
            students,
            limit,
        }
    }

    pub fn enrollment_limit(&self) -> EnrollmentLimit {
        self.limit
    }

    /// Lists courses matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_courses(&self, filter: CourseFilter) -> Result<Vec<Course>, AppError> {
        self.courses.list(filter).await
    }

    /// Retrieves a course by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_course(&self, id: i64) -> Result<Course, AppError> {
        self.courses
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found", json!({ "id": id })))
    }

    /// Creates a course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the student list breaks an
    /// enrollment rule.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_course(&self, name: String, students: Vec<i64>) -> Result<Course, AppError> {
        let students = self.check_students(students).await?;

        let course = self.courses.create(NewCourse { name, students }).await?;
        tracing::info!(
            course_id = course.id,
            students = course.students.len(),
            "Course created"
        );

        Ok(course)
    }

    /// Partially updates a course.
    ///
    /// Existence is checked before the student list is validated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course does not exist.
    /// Returns [`AppError::Validation`] if the student list breaks an
    /// enrollment rule.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update_course(&self, id: i64, patch: CoursePatch) -> Result<Course, AppError> {
        self.get_course(id).await?;

        let students = match patch.students {
            Some(students) => Some(self.check_students(students).await?),
            None => None,
        };

        let course = self
            .courses
            .update(
                id,
                CoursePatch {
                    name: patch.name,
                    students,
                },
            )
            .await?;
        tracing::info!(course_id = id, "Course updated");

        Ok(course)
    }

    /// Replaces every field of a course.
    ///
    /// # Errors
    ///
    /// See [`Self::update_course`].
    pub async fn replace_course(
        &self,
        id: i64,
        name: String,
        students: Vec<i64>,
    ) -> Result<Course, AppError> {
        self.update_course(
            id,
            CoursePatch {
                name: Some(name),
                students: Some(students),
            },
        )
        .await
    }

    /// Deletes a course. Enrolled students are kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_course(&self, id: i64) -> Result<(), AppError> {
        self.courses.delete(id).await?;
        tracing::info!(course_id = id, "Course deleted");
        Ok(())
    }

    /// Counts all courses.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count_courses(&self) -> Result<i64, AppError> {
        self.courses.count().await
    }

    async fn check_students(&self, students: Vec<i64>) -> Result<Vec<i64>, AppError> {
        let students = dedup_students(self.limit.validate(students)?);

        let missing = self.students.find_missing(&students).await?;
        if !missing.is_empty() {
            tracing::debug!(?missing, "Rejected unknown student ids");
            return Err(AppError::bad_request(
                "Unknown student ids",
                json!({ "field": "students", "missing": missing }),
            ));
        }

        Ok(students)
    }
}
