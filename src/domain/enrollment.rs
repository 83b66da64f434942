//! Per-course enrollment limit.
//!
//! A course may never hold more than [`EnrollmentLimit::max`] students. The
//! check runs on every write that supplies a student list, before anything
//! reaches storage.

use serde_json::json;
use std::collections::HashSet;

use crate::error::AppError;

/// Default upper bound on the number of students in one course.
pub const MAX_STUDENTS_PER_COURSE: usize = 20;

/// Errors raised by the enrollment rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnrollmentError {
    #[error("На курсе не может быть больше {max} студентов")]
    TooManyStudents { max: usize, count: usize },
}

impl From<EnrollmentError> for AppError {
    fn from(e: EnrollmentError) -> Self {
        let message = e.to_string();
        match e {
            EnrollmentError::TooManyStudents { max, count } => AppError::bad_request(
                message,
                json!({ "field": "students", "max": max, "count": count }),
            ),
        }
    }
}

/// Guards the maximum course size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrollmentLimit {
    max: usize,
}

impl EnrollmentLimit {
    pub fn new(max: usize) -> Self {
        Self { max }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Checks the student list against the limit.
    ///
    /// Returns the list unchanged on success. Exactly `max` students is
    /// allowed.
    ///
    /// # Errors
    ///
    /// Returns [`EnrollmentError::TooManyStudents`] if the list is longer
    /// than the limit.
    pub fn validate(&self, students: Vec<i64>) -> Result<Vec<i64>, EnrollmentError> {
        if students.len() > self.max {
            return Err(EnrollmentError::TooManyStudents {
                max: self.max,
                count: students.len(),
            });
        }
        Ok(students)
    }
}

impl Default for EnrollmentLimit {
    fn default() -> Self {
        Self::new(MAX_STUDENTS_PER_COURSE)
    }
}

/// Drops repeated student ids, keeping the first occurrence of each.
pub fn dedup_students(students: Vec<i64>) -> Vec<i64> {
    let mut seen = HashSet::with_capacity(students.len());
    students.into_iter().filter(|id| seen.insert(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<i64> {
        (1..=n as i64).collect()
    }

    #[test]
    fn test_empty_list_is_valid() {
        let limit = EnrollmentLimit::default();
        assert_eq!(limit.validate(vec![]), Ok(vec![]));
    }

    #[test]
    fn test_below_limit_is_returned_unchanged() {
        let limit = EnrollmentLimit::default();
        let students = ids(19);
        assert_eq!(limit.validate(students.clone()), Ok(students));
    }

    #[test]
    fn test_exactly_at_limit_is_valid() {
        let limit = EnrollmentLimit::default();
        assert!(limit.validate(ids(MAX_STUDENTS_PER_COURSE)).is_ok());
    }

    #[test]
    fn test_one_over_limit_is_rejected() {
        let limit = EnrollmentLimit::default();
        let err = limit
            .validate(ids(MAX_STUDENTS_PER_COURSE + 1))
            .unwrap_err();

        assert_eq!(err, EnrollmentError::TooManyStudents { max: 20, count: 21 });
        assert_eq!(err.to_string(), "На курсе не может быть больше 20 студентов");
    }

    #[test]
    fn test_custom_limit() {
        let limit = EnrollmentLimit::new(2);
        assert_eq!(limit.max(), 2);
        assert!(limit.validate(ids(2)).is_ok());
        assert!(limit.validate(ids(3)).is_err());
    }

    #[test]
    fn test_error_converts_to_bad_request() {
        let err: AppError = EnrollmentError::TooManyStudents { max: 20, count: 25 }.into();

        match err {
            AppError::Validation { message, details } => {
                assert_eq!(message, "На курсе не может быть больше 20 студентов");
                assert_eq!(details["field"], "students");
                assert_eq!(details["count"], 25);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_order() {
        assert_eq!(dedup_students(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert!(dedup_students(vec![]).is_empty());
    }
}
