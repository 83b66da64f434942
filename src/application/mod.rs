//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::course_service::CourseService`] - Course CRUD and enrollment rules
//! - [`services::student_service::StudentService`] - Student records

pub mod services;
