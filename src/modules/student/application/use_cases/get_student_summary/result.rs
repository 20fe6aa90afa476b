use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::student::domain::{Enrollment, Grade, Student};

/// Projection returned by the student read endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    pub id: i32,
    pub name: String,
    pub enrollment_date: NaiveDate,
    pub total_credits: u32,
    pub enrollments: Vec<EnrollmentLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentLine {
    pub course_id: Option<i32>,
    pub course_title: Option<String>,
    pub credits: u32,
    pub grade: Option<Grade>,
}

impl From<&Enrollment> for EnrollmentLine {
    fn from(enrollment: &Enrollment) -> Self {
        Self {
            course_id: enrollment.course_id,
            course_title: enrollment.course.as_ref().map(|c| c.title.clone()),
            credits: enrollment.credits(),
            grade: enrollment.grade,
        }
    }
}

impl From<Student> for StudentSummary {
    fn from(student: Student) -> Self {
        let total_credits = student.total_credits();
        let enrollments = student
            .enrollments
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(EnrollmentLine::from)
            .collect();

        Self {
            id: student.id,
            name: student.full_name(),
            enrollment_date: student.enrollment_date,
            total_credits,
            enrollments,
        }
    }
}
