//! API route table.

use crate::api::handlers::{
    create_course_handler, create_student_handler, delete_course_handler, delete_student_handler,
    get_course_handler, get_student_handler, health_handler, list_courses_handler,
    list_students_handler, replace_course_handler, update_course_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /courses`         - List courses (`?id=`, `?name=` filters)
/// - `POST   /courses`         - Create a course
/// - `GET    /courses/{id}`    - Retrieve a course
/// - `PATCH  /courses/{id}`    - Partially update a course
/// - `PUT    /courses/{id}`    - Replace a course
/// - `DELETE /courses/{id}`    - Delete a course
/// - `GET    /students`        - List students
/// - `POST   /students`        - Create a student
/// - `GET    /students/{id}`   - Retrieve a student
/// - `DELETE /students/{id}`   - Delete a student
/// - `GET    /health`          - Storage health check
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/courses",
            get(list_courses_handler).post(create_course_handler),
        )
        .route(
            "/courses/{id}",
            get(get_course_handler)
                .patch(update_course_handler)
                .put(replace_course_handler)
                .delete(delete_course_handler),
        )
        .route(
            "/students",
            get(list_students_handler).post(create_student_handler),
        )
        .route(
            "/students/{id}",
            get(get_student_handler).delete(delete_student_handler),
        )
        .route("/health", get(health_handler))
}
