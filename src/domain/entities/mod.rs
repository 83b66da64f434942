//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Course`] - A course with an ordered set of enrolled students
//! - [`Student`] - A student that may be enrolled in many courses
//!
//! # Design Pattern
//!
//! Entities have separate structs for creation and change:
//! - `NewCourse`, `NewStudent` - For creating new records
//! - `CoursePatch` - For partial updates
//! - `CourseFilter` - For list queries

pub mod course;
pub mod student;

pub use course::{Course, CourseFilter, CoursePatch, NewCourse};
pub use student::{NewStudent, Student};
