//! PostgreSQL implementation of student repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use sqlx::PgPool;
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::{NewStudent, Student};
use crate::domain::repositories::StudentRepository;
use crate::error::AppError;

/// PostgreSQL repository for students.
///
/// Enrollment rows referencing a deleted student are removed by the
/// `ON DELETE CASCADE` foreign key on `course_students`.
pub struct PgStudentRepository {
    pool: Arc<PgPool>,
}

impl PgStudentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct StudentRow {
    id: i64,
    name: String,
    birth_date: NaiveDate,
}

impl From<StudentRow> for Student {
    fn from(r: StudentRow) -> Self {
        Student::new(r.id, r.name, r.birth_date)
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn create(&self, new_student: NewStudent) -> Result<Student, AppError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            INSERT INTO students (name, birth_date)
            VALUES ($1, $2)
            RETURNING id, name, birth_date
            "#,
        )
        .bind(new_student.name)
        .bind(new_student.birth_date)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let row = sqlx::query_as::<_, StudentRow>(
            "SELECT id, name, birth_date FROM students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Student::from))
    }

    async fn list(&self) -> Result<Vec<Student>, AppError> {
        let rows = sqlx::query_as::<_, StudentRow>(
            "SELECT id, name, birth_date FROM students ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Student not found",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    async fn find_missing(&self, ids: &[i64]) -> Result<Vec<i64>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: HashSet<i64> =
            sqlx::query_scalar::<_, i64>("SELECT id FROM students WHERE id = ANY($1)")
                .bind(ids)
                .fetch_all(self.pool.as_ref())
                .await?
                .into_iter()
                .collect();

        Ok(ids.iter().copied().filter(|id| !found.contains(id)).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
