use serde::{Deserialize, Serialize};

use crate::modules::course::domain::Course;
use crate::modules::student::domain::value_objects::Grade;

/// Join between one student and one course.
///
/// `course` is `None` when the course was not loaded or the row no longer
/// references one (`course_id` is nullable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: i32,
    pub student_id: i32,
    pub course_id: Option<i32>,
    pub grade: Option<Grade>,
    pub course: Option<Course>,
}

impl Enrollment {
    pub fn new(id: i32, student_id: i32, course: Option<Course>) -> Self {
        Self {
            id,
            student_id,
            course_id: course.as_ref().map(|c| c.id),
            grade: None,
            course,
        }
    }

    pub fn with_grade(mut self, grade: Grade) -> Self {
        self.grade = Some(grade);
        self
    }

    /// Credit weight this enrollment contributes; zero without a course
    pub fn credits(&self) -> u32 {
        self.course.as_ref().map_or(0, Course::credits)
    }
}
