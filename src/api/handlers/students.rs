//! Handlers for student endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::student::{CreateStudentRequest, StudentView};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all students ordered by id.
///
/// # Endpoint
///
/// `GET /students`
pub async fn list_students_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentView>>, AppError> {
    let students = state.student_service.list_students().await?;

    Ok(Json(students.into_iter().map(StudentView::from).collect()))
}

/// Retrieves a single student.
///
/// # Endpoint
///
/// `GET /students/{id}`
pub async fn get_student_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<StudentView>, AppError> {
    let Path(id) = id?;

    let student = state.student_service.get_student(id).await?;

    Ok(Json(student.into()))
}

/// Creates a student.
///
/// # Endpoint
///
/// `POST /students`
///
/// ```json
/// { "name": "Student 0", "birth_date": "1995-01-01" }
/// ```
///
/// # Errors
///
/// Returns 400 if a field is missing or malformed.
pub async fn create_student_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StudentView>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let (name, birth_date) = payload.into_parts();
    let student = state
        .student_service
        .create_student(name, birth_date)
        .await?;

    Ok((StatusCode::CREATED, Json(student.into())))
}

/// Deletes a student and removes it from every course.
///
/// # Endpoint
///
/// `DELETE /students/{id}`
///
/// # Errors
///
/// Returns 404 if the student does not exist.
pub async fn delete_student_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;

    state.student_service.delete_student(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
