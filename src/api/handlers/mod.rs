//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod courses;
pub mod health;
pub mod students;

pub use courses::{
    create_course_handler, delete_course_handler, get_course_handler, list_courses_handler,
    replace_course_handler, update_course_handler,
};
pub use health::health_handler;
pub use students::{
    create_student_handler, delete_student_handler, get_student_handler, list_students_handler,
};
