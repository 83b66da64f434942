//! PostgreSQL implementation of course repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{PgPool, Postgres, Transaction};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Course, CourseFilter, CoursePatch, NewCourse};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;

/// PostgreSQL repository for courses.
///
/// Enrollment lists live in `course_students`; the `position` column keeps
/// the order in which students were supplied. Every write runs in a single
/// transaction.
pub struct PgCourseRepository {
    pool: Arc<PgPool>,
}

impl PgCourseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CourseRow {
    id: i64,
    name: String,
}

#[derive(sqlx::FromRow)]
struct EnrollmentRow {
    course_id: i64,
    student_id: i64,
}

async fn replace_students(
    tx: &mut Transaction<'_, Postgres>,
    course_id: i64,
    students: &[i64],
) -> Result<(), AppError> {
    sqlx::query("DELETE FROM course_students WHERE course_id = $1")
        .bind(course_id)
        .execute(&mut **tx)
        .await?;

    if students.is_empty() {
        return Ok(());
    }

    sqlx::query(
        r#"
        INSERT INTO course_students (course_id, student_id, position)
        SELECT $1, s.id, (s.ord - 1)::INTEGER
        FROM UNNEST($2::BIGINT[]) WITH ORDINALITY AS s(id, ord)
        "#,
    )
    .bind(course_id)
    .bind(students)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

async fn load_students(
    tx: &mut Transaction<'_, Postgres>,
    course_id: i64,
) -> Result<Vec<i64>, AppError> {
    let students = sqlx::query_scalar::<_, i64>(
        "SELECT student_id FROM course_students WHERE course_id = $1 ORDER BY position",
    )
    .bind(course_id)
    .fetch_all(&mut **tx)
    .await?;

    Ok(students)
}

impl PgCourseRepository {
    /// Attaches enrollment lists to a batch of course rows in one query.
    async fn with_students(&self, rows: Vec<CourseRow>) -> Result<Vec<Course>, AppError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let enrollments = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            SELECT course_id, student_id
            FROM course_students
            WHERE course_id = ANY($1)
            ORDER BY course_id, position
            "#,
        )
        .bind(&ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut by_course: HashMap<i64, Vec<i64>> = HashMap::new();
        for e in enrollments {
            by_course.entry(e.course_id).or_default().push(e.student_id);
        }

        Ok(rows
            .into_iter()
            .map(|r| {
                let students = by_course.remove(&r.id).unwrap_or_default();
                Course::new(r.id, r.name, students)
            })
            .collect())
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, CourseRow>(
            "INSERT INTO courses (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&new_course.name)
        .fetch_one(&mut *tx)
        .await?;

        replace_students(&mut tx, row.id, &new_course.students).await?;
        tx.commit().await?;

        Ok(Course::new(row.id, row.name, new_course.students))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        let row = sqlx::query_as::<_, CourseRow>("SELECT id, name FROM courses WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        match row {
            Some(row) => Ok(self.with_students(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn list(&self, filter: CourseFilter) -> Result<Vec<Course>, AppError> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, name
            FROM courses
            WHERE ($1::BIGINT IS NULL OR id = $1)
              AND ($2::TEXT IS NULL OR name = $2)
            ORDER BY id
            "#,
        )
        .bind(filter.id)
        .bind(filter.name)
        .fetch_all(self.pool.as_ref())
        .await?;

        self.with_students(rows).await
    }

    async fn update(&self, id: i64, patch: CoursePatch) -> Result<Course, AppError> {
        let mut tx = self.pool.begin().await?;

        // Row lock keeps concurrent writers to the same course serialized.
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            UPDATE courses SET name = COALESCE($2::TEXT, name)
            WHERE id = $1
            RETURNING id, name
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::not_found("Course not found", json!({ "id": id })))?;

        if let Some(students) = &patch.students {
            replace_students(&mut tx, id, students).await?;
        }

        let students = load_students(&mut tx, id).await?;
        tx.commit().await?;

        Ok(Course::new(row.id, row.name, students))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Course not found",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
