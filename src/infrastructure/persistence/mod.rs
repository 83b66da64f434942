//! Storage adapters for the repository traits.
//!
//! # Adapters
//!
//! - [`PgCourseRepository`] - Course storage in PostgreSQL
//! - [`PgStudentRepository`] - Student storage in PostgreSQL
//! - [`MemoryStore`] - In-process storage for both entities
//!
//! The PostgreSQL adapters use SQLx with runtime-checked queries against the
//! schema in `migrations/`.

pub mod memory_store;
pub mod pg_course_repository;
pub mod pg_student_repository;

pub use memory_store::MemoryStore;
pub use pg_course_repository::PgCourseRepository;
pub use pg_student_repository::PgStudentRepository;
