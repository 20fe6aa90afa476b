use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::student::domain::Student;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSearchHit {
    pub id: i32,
    pub last_name: String,
    pub first_name: String,
    pub enrollment_date: NaiveDate,
    pub total_credits: u32,
}

impl From<Student> for StudentSearchHit {
    fn from(student: Student) -> Self {
        Self {
            total_credits: student.total_credits(),
            id: student.id,
            last_name: student.last_name,
            first_name: student.first_name,
            enrollment_date: student.enrollment_date,
        }
    }
}
