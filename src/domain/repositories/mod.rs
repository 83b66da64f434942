//! Repository trait definitions for the domain layer.
//!
//! These traits are the persistence port of the service. Concrete adapters
//! live in `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`CourseRepository`] - Course CRUD and enrollment lists
//! - [`StudentRepository`] - Student CRUD and reference checks
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` under `cfg(test)`.
//! See integration tests in `tests/repository_*.rs` for the PostgreSQL adapter.

pub mod course_repository;
pub mod student_repository;

pub use course_repository::CourseRepository;
pub use student_repository::StudentRepository;

#[cfg(test)]
pub use course_repository::MockCourseRepository;
#[cfg(test)]
pub use student_repository::MockStudentRepository;
