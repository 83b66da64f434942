//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs use Serde for JSON/query deserialization and `validator` for
//! field rules. Response DTOs are mapped field by field from domain entities.

pub mod course;
pub mod health;
pub mod student;
