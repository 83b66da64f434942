//! DTOs for student endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Student;

/// Request body for `POST /students`.
///
/// `birth_date` is an ISO date (`1995-01-01`).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(
        required(message = "This field is required"),
        length(min = 1, max = 256, message = "Name must be 1-256 characters")
    )]
    pub name: Option<String>,

    #[validate(required(message = "This field is required"))]
    pub birth_date: Option<NaiveDate>,
}

impl CreateStudentRequest {
    /// Returns the student name and birth date.
    ///
    /// Call [`Validate::validate`] first; absent fields become their
    /// defaults here.
    pub fn into_parts(self) -> (String, NaiveDate) {
        (
            self.name.unwrap_or_default(),
            self.birth_date.unwrap_or_default(),
        )
    }
}

/// Wire representation of a student.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentView {
    pub id: i64,
    pub name: String,
    pub birth_date: NaiveDate,
}

impl From<Student> for StudentView {
    fn from(s: Student) -> Self {
        StudentView {
            id: s.id,
            name: s.name,
            birth_date: s.birth_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_student_request_parses_date() {
        let req: CreateStudentRequest =
            serde_json::from_value(json!({ "name": "Student 0", "birth_date": "1995-01-01" }))
                .unwrap();

        assert!(req.validate().is_ok());
        assert_eq!(req.birth_date, NaiveDate::from_ymd_opt(1995, 1, 1));
    }

    #[test]
    fn test_create_student_request_requires_birth_date() {
        let req: CreateStudentRequest =
            serde_json::from_value(json!({ "name": "Student 0" })).unwrap();

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("birth_date"));
    }

    #[test]
    fn test_create_student_request_into_parts() {
        let req: CreateStudentRequest =
            serde_json::from_value(json!({ "name": "Student 0", "birth_date": "1995-01-01" }))
                .unwrap();

        let (name, birth_date) = req.into_parts();
        assert_eq!(name, "Student 0");
        assert_eq!(birth_date, NaiveDate::from_ymd_opt(1995, 1, 1).unwrap());
    }

    #[test]
    fn test_student_view_serializes_iso_date() {
        let view = StudentView::from(Student::new(
            2,
            "Ann".to_string(),
            NaiveDate::from_ymd_opt(2001, 12, 31).unwrap(),
        ));

        assert_eq!(
            serde_json::to_value(view).unwrap(),
            json!({ "id": 2, "name": "Ann", "birth_date": "2001-12-31" })
        );
    }
}
