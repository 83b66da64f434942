//! In-process storage adapter.
//!
//! Implements both [`CourseRepository`] and [`StudentRepository`] over a single
//! lock so that reference checks, cascades and writes happen as one unit.
//! Used for `STORAGE_BACKEND=memory` and in HTTP tests.

use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{
    Course, CourseFilter, CoursePatch, NewCourse, NewStudent, Student,
};
use crate::domain::repositories::{CourseRepository, StudentRepository};
use crate::error::AppError;

#[derive(Debug, Default)]
struct Tables {
    courses: BTreeMap<i64, Course>,
    students: BTreeMap<i64, Student>,
    next_course_id: i64,
    next_student_id: i64,
}

impl Tables {
    fn check_students(&self, ids: &[i64]) -> Result<(), AppError> {
        let missing: Vec<i64> = ids
            .iter()
            .copied()
            .filter(|id| !self.students.contains_key(id))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::bad_request(
                "Unknown student ids",
                json!({ "field": "students", "missing": missing }),
            ))
        }
    }
}

/// Memory-backed store. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CourseRepository for MemoryStore {
    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError> {
        let mut tables = self.tables.write().await;
        tables.check_students(&new_course.students)?;

        tables.next_course_id += 1;
        let course = Course::new(tables.next_course_id, new_course.name, new_course.students);
        tables.courses.insert(course.id, course.clone());

        Ok(course)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        Ok(self.tables.read().await.courses.get(&id).cloned())
    }

    async fn list(&self, filter: CourseFilter) -> Result<Vec<Course>, AppError> {
        Ok(self
            .tables
            .read()
            .await
            .courses
            .values()
            .filter(|c| c.matches(&filter))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, patch: CoursePatch) -> Result<Course, AppError> {
        let mut tables = self.tables.write().await;

        if !tables.courses.contains_key(&id) {
            return Err(AppError::not_found("Course not found", json!({ "id": id })));
        }
        if let Some(students) = &patch.students {
            tables.check_students(students)?;
        }

        let course = tables
            .courses
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Course not found", json!({ "id": id })))?;
        if let Some(name) = patch.name {
            course.name = name;
        }
        if let Some(students) = patch.students {
            course.students = students;
        }

        Ok(course.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.tables
            .write()
            .await
            .courses
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("Course not found", json!({ "id": id })))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables.read().await.courses.len() as i64)
    }
}

#[async_trait]
impl StudentRepository for MemoryStore {
    async fn create(&self, new_student: NewStudent) -> Result<Student, AppError> {
        let mut tables = self.tables.write().await;

        tables.next_student_id += 1;
        let student = Student::new(
            tables.next_student_id,
            new_student.name,
            new_student.birth_date,
        );
        tables.students.insert(student.id, student.clone());

        Ok(student)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        Ok(self.tables.read().await.students.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Student>, AppError> {
        Ok(self.tables.read().await.students.values().cloned().collect())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;

        if tables.students.remove(&id).is_none() {
            return Err(AppError::not_found("Student not found", json!({ "id": id })));
        }
        for course in tables.courses.values_mut() {
            course.students.retain(|s| *s != id);
        }

        Ok(())
    }

    async fn find_missing(&self, ids: &[i64]) -> Result<Vec<i64>, AppError> {
        let tables = self.tables.read().await;
        Ok(ids
            .iter()
            .copied()
            .filter(|id| !tables.students.contains_key(id))
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables.read().await.students.len() as i64)
    }
}
