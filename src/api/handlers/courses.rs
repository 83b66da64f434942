//! Handlers for course endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::course::{CourseListParams, CourseRequest, CourseView, UpdateCourseRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Lists courses, optionally filtered.
///
/// # Endpoint
///
/// `GET /courses?id={id}&name={name}`
///
/// Filters are exact and combined with AND. Results are ordered by id.
///
/// # Errors
///
/// Returns 400 if `id` is not an integer.
pub async fn list_courses_handler(
    State(state): State<AppState>,
    params: Result<Query<CourseListParams>, QueryRejection>,
) -> Result<Json<Vec<CourseView>>, AppError> {
    let Query(params) = params?;

    let courses = state.course_service.list_courses(params.into()).await?;

    Ok(Json(courses.into_iter().map(CourseView::from).collect()))
}

/// Retrieves a single course.
///
/// # Endpoint
///
/// `GET /courses/{id}`
///
/// # Errors
///
/// Returns 404 if the course does not exist.
pub async fn get_course_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<CourseView>, AppError> {
    let Path(id) = id?;

    let course = state.course_service.get_course(id).await?;

    Ok(Json(course.into()))
}

/// Creates a course.
///
/// # Endpoint
///
/// `POST /courses`
///
/// # Request Body
///
/// ```json
/// { "name": "New Course", "students": [1, 2, 3] }
/// ```
///
/// # Errors
///
/// Returns 400 if the name is missing or invalid, if more students than the
/// configured limit are given, or if a student id does not exist.
pub async fn create_course_handler(
    State(state): State<AppState>,
    payload: Result<Json<CourseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CourseView>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let (name, students) = payload.into_parts();
    let course = state.course_service.create_course(name, students).await?;

    Ok((StatusCode::CREATED, Json(course.into())))
}

/// Partially updates a course.
///
/// # Endpoint
///
/// `PATCH /courses/{id}`
///
/// All fields are optional. `students` replaces the whole list.
///
/// # Errors
///
/// Returns 404 if the course does not exist.
/// Returns 400 on validation failure.
pub async fn update_course_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateCourseRequest>, JsonRejection>,
) -> Result<Json<CourseView>, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    payload.validate()?;

    let course = state
        .course_service
        .update_course(id, payload.into())
        .await?;

    Ok(Json(course.into()))
}

/// Replaces a course.
///
/// # Endpoint
///
/// `PUT /courses/{id}`
///
/// `name` is required; an absent `students` clears the enrollment list.
///
/// # Errors
///
/// Returns 404 if the course does not exist.
/// Returns 400 on validation failure.
pub async fn replace_course_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<CourseRequest>, JsonRejection>,
) -> Result<Json<CourseView>, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    payload.validate()?;

    let (name, students) = payload.into_parts();
    let course = state
        .course_service
        .replace_course(id, name, students)
        .await?;

    Ok(Json(course.into()))
}

/// Deletes a course.
///
/// # Endpoint
///
/// `DELETE /courses/{id}`
///
/// Students enrolled in the course are not affected.
///
/// # Errors
///
/// Returns 404 if the course does not exist.
pub async fn delete_course_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;

    state.course_service.delete_course(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
