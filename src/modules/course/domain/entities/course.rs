use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i32,
    pub name: String,
}

/// A course a student can enroll in. `credits` is always positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i32,
    pub title: String,
    credits: u32,
    pub department_id: i32,
}

impl Course {
    pub fn new(id: i32, title: impl Into<String>, credits: i32, department_id: i32) -> AppResult<Self> {
        Validator::validate_credits(credits)?;
        let title = title.into();
        if title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Course title cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id,
            title,
            credits: credits.unsigned_abs(),
            department_id,
        })
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }
}
