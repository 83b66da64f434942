//! Domain layer containing business entities and rules.
//!
//! This module is independent of HTTP and storage concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Course and student data structures
//! - [`enrollment`] - The per-course student limit
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod enrollment;
pub mod entities;
pub mod repositories;
