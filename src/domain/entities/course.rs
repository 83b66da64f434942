//! Course entity and its write/query inputs.

/// A course with its enrolled students.
///
/// `students` holds student ids in enrollment order and never contains
/// duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub students: Vec<i64>,
}

impl Course {
    /// Creates a new Course instance.
    pub fn new(id: i64, name: String, students: Vec<i64>) -> Self {
        Self { id, name, students }
    }

    /// Returns true if the course matches every filter that is set.
    pub fn matches(&self, filter: &CourseFilter) -> bool {
        filter.id.is_none_or(|id| self.id == id)
            && filter.name.as_deref().is_none_or(|name| self.name == name)
    }
}

/// Input data for creating a new course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub name: String,
    pub students: Vec<i64>,
}

/// Partial update for an existing course.
///
/// `None` fields are left unchanged. `students: Some(..)` replaces the whole
/// enrollment list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoursePatch {
    pub name: Option<String>,
    pub students: Option<Vec<i64>>,
}

/// Exact-match filters for listing courses. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
}
