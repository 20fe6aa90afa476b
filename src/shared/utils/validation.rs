use std::sync::OnceLock;

use regex::Regex;

use crate::shared::errors::AppError;

/// Unquoted SQL identifier, optionally schema-qualified (`public.students`)
fn table_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,62}(\.[A-Za-z_][A-Za-z0-9_]{0,62})?$")
            .expect("table name pattern is valid")
    })
}

pub struct Validator;

impl Validator {
    pub fn validate_student_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Student name cannot be empty".to_string(),
            ));
        }
        if name.chars().count() > 50 {
            return Err(AppError::ValidationError(
                "Student name too long (max 50 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_credits(credits: i32) -> Result<(), AppError> {
        if credits <= 0 {
            return Err(AppError::ValidationError(
                "Course credits must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_table_name(table: &str) -> Result<(), AppError> {
        if !table_name_pattern().is_match(table) {
            return Err(AppError::ValidationError(format!(
                "'{}' is not a valid table name",
                table
            )));
        }
        Ok(())
    }

    pub fn validate_search_query(query: &str) -> Result<(), AppError> {
        if query.chars().count() > 100 {
            return Err(AppError::ValidationError(
                "Search query too long (max 100 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_pagination(page: u32, page_size: u32) -> Result<(), AppError> {
        if page == 0 {
            return Err(AppError::ValidationError(
                "Page numbers start at 1".to_string(),
            ));
        }
        if page_size == 0 {
            return Err(AppError::ValidationError(
                "Page size must be positive".to_string(),
            ));
        }
        if page_size > 100 {
            return Err(AppError::ValidationError(
                "Page size cannot exceed 100".to_string(),
            ));
        }
        Ok(())
    }
}
