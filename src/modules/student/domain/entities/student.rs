use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enrollment::Enrollment;
use crate::modules::student::domain::services::total_credits::total_credits;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i32,
    pub last_name: String,
    pub first_name: String,
    pub enrollment_date: NaiveDate,
    /// `None` until the enrollments are loaded
    pub enrollments: Option<Vec<Enrollment>>,
}

impl Student {
    pub fn new(
        id: i32,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        enrollment_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            last_name: last_name.into(),
            first_name: first_name.into(),
            enrollment_date,
            enrollments: None,
        }
    }

    pub fn with_enrollments(mut self, enrollments: Vec<Enrollment>) -> Self {
        self.enrollments = Some(enrollments);
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Sum of course credits over loaded enrollments
    pub fn total_credits(&self) -> u32 {
        total_credits(self.enrollments.as_deref())
    }
}
