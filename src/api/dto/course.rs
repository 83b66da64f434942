//! DTOs for course endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::domain::entities::{Course, CourseFilter, CoursePatch};

/// Query parameters for `GET /courses`.
///
/// Both filters are exact matches. An empty value (`?name=`) is treated as
/// absent.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct CourseListParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub id: Option<i64>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub name: Option<String>,
}

impl From<CourseListParams> for CourseFilter {
    fn from(p: CourseListParams) -> Self {
        CourseFilter {
            id: p.id,
            name: p.name,
        }
    }
}

/// Request body for `POST /courses` and `PUT /courses/{id}`.
///
/// Unknown keys are ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct CourseRequest {
    #[validate(
        required(message = "This field is required"),
        length(min = 1, max = 256, message = "Name must be 1-256 characters")
    )]
    pub name: Option<String>,

    /// Student ids. Defaults to no students.
    #[serde(default)]
    pub students: Vec<i64>,
}

impl CourseRequest {
    /// Returns the course name and student ids.
    ///
    /// Call [`Validate::validate`] first; a missing name becomes empty here.
    pub fn into_parts(self) -> (String, Vec<i64>) {
        (self.name.unwrap_or_default(), self.students)
    }
}

/// Request body for `PATCH /courses/{id}`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, max = 256, message = "Name must be 1-256 characters"))]
    pub name: Option<String>,

    /// Replaces the whole enrollment list when present.
    pub students: Option<Vec<i64>>,
}

impl From<UpdateCourseRequest> for CoursePatch {
    fn from(r: UpdateCourseRequest) -> Self {
        CoursePatch {
            name: r.name,
            students: r.students,
        }
    }
}

/// Wire representation of a course.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseView {
    pub id: i64,
    pub name: String,
    pub students: Vec<i64>,
}

impl From<Course> for CourseView {
    fn from(c: Course) -> Self {
        CourseView {
            id: c.id,
            name: c.name,
            students: c.students,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_course_request_ignores_unknown_fields() {
        let req: CourseRequest = serde_json::from_value(json!({
            "name": "New Course",
            "max_students": 20,
            "students": [1, 2]
        }))
        .unwrap();

        assert!(req.validate().is_ok());
        assert_eq!(req.into_parts(), ("New Course".to_string(), vec![1, 2]));
    }

    #[test]
    fn test_course_request_students_default_empty() {
        let req: CourseRequest = serde_json::from_value(json!({ "name": "A" })).unwrap();
        assert!(req.students.is_empty());
    }

    #[test]
    fn test_course_request_requires_name() {
        let req: CourseRequest = serde_json::from_value(json!({ "students": [] })).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_course_request_rejects_empty_and_long_names() {
        let empty: CourseRequest = serde_json::from_value(json!({ "name": "" })).unwrap();
        assert!(empty.validate().is_err());

        let long: CourseRequest =
            serde_json::from_value(json!({ "name": "x".repeat(257) })).unwrap();
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_update_request_to_patch() {
        let req: UpdateCourseRequest =
            serde_json::from_value(json!({ "name": "Updated Course Name" })).unwrap();
        assert!(req.validate().is_ok());

        let patch = CoursePatch::from(req);
        assert_eq!(patch.name.as_deref(), Some("Updated Course Name"));
        assert!(patch.students.is_none());
    }

    #[test]
    fn test_course_view_shape() {
        let view = CourseView::from(Course::new(4, "Rust".to_string(), vec![7, 3]));
        assert_eq!(
            serde_json::to_value(view).unwrap(),
            json!({ "id": 4, "name": "Rust", "students": [7, 3] })
        );
    }
}
