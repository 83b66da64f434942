//! Student entity.

use chrono::NaiveDate;

/// A student that can be enrolled in any number of courses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub birth_date: NaiveDate,
}

impl Student {
    /// Creates a new Student instance.
    pub fn new(id: i64, name: String, birth_date: NaiveDate) -> Self {
        Self {
            id,
            name,
            birth_date,
        }
    }
}

/// Input data for creating a new student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub birth_date: NaiveDate,
}
