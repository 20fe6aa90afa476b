use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// One row of a student upload file.
///
/// Headers are matched in snake_case, camelCase or PascalCase
/// (`first_name`, `firstName`, `FirstName`); dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(alias = "firstName", alias = "FirstName")]
    pub first_name: String,
    #[serde(alias = "lastName", alias = "LastName")]
    pub last_name: String,
    #[serde(alias = "enrollmentDate", alias = "EnrollmentDate")]
    pub enrollment_date: NaiveDate,
}

impl StudentRecord {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        enrollment_date: NaiveDate,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            enrollment_date,
        }
    }

    /// Trim names and reject rows the students table cannot hold
    pub fn normalized(self) -> AppResult<Self> {
        let first_name = self.first_name.trim().to_string();
        let last_name = self.last_name.trim().to_string();

        for name in [&first_name, &last_name] {
            Validator::validate_student_name(name)?;
            if name.contains('\0') {
                return Err(AppError::InvalidInput(format!(
                    "Name {:?} contains a NUL character",
                    name
                )));
            }
        }

        Ok(Self {
            first_name,
            last_name,
            enrollment_date: self.enrollment_date,
        })
    }
}
