#![allow(dead_code)]

use axum::Router;
use axum::http::StatusCode;
use axum_test::TestServer;
use course_api::domain::enrollment::{EnrollmentLimit, MAX_STUDENTS_PER_COURSE};
use course_api::routes::app_router;
use course_api::state::AppState;
use serde_json::{Value, json};
use sqlx::PgPool;

/// Full application (routes, tracing, path normalization) over memory storage.
pub fn make_server() -> TestServer {
    make_server_with_limit(MAX_STUDENTS_PER_COURSE)
}

pub fn make_server_with_limit(max: usize) -> TestServer {
    let state = AppState::in_memory(EnrollmentLimit::new(max));
    let app = Router::new().fallback_service(app_router(state));
    TestServer::new(app).unwrap()
}

pub async fn create_student(server: &TestServer, name: &str) -> i64 {
    let response = server
        .post("/students")
        .json(&json!({ "name": name, "birth_date": "1995-01-01" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

pub async fn create_students(server: &TestServer, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        ids.push(create_student(server, &format!("Student {i}")).await);
    }
    ids
}

pub async fn create_course(server: &TestServer, name: &str) -> Value {
    let response = server.post("/courses").json(&json!({ "name": name })).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

/// Three courses with distinct names.
pub async fn create_courses(server: &TestServer) -> Vec<Value> {
    let mut courses = Vec::new();
    for name in ["Algebra", "Biology", "Chemistry"] {
        courses.push(create_course(server, name).await);
    }
    courses
}

pub async fn insert_student(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO students (name, birth_date) VALUES ($1, '1995-01-01') RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_students(pool: &PgPool, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        ids.push(insert_student(pool, &format!("Student {i}")).await);
    }
    ids
}
