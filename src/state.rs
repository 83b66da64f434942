//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{CourseService, StudentService};
use crate::domain::enrollment::EnrollmentLimit;
use crate::domain::repositories::{CourseRepository, StudentRepository};
use crate::infrastructure::persistence::MemoryStore;

#[derive(Clone)]
pub struct AppState {
    pub course_service: Arc<CourseService>,
    pub student_service: Arc<StudentService>,
}

impl AppState {
    /// Wires services over the given repositories.
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        students: Arc<dyn StudentRepository>,
        limit: EnrollmentLimit,
    ) -> Self {
        Self {
            course_service: Arc::new(CourseService::new(courses, students.clone(), limit)),
            student_service: Arc::new(StudentService::new(students)),
        }
    }

    /// State backed by a fresh [`MemoryStore`].
    pub fn in_memory(limit: EnrollmentLimit) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(store.clone(), store, limit)
    }
}
