use async_trait::async_trait;
use std::sync::Arc;

use crate::log_debug;
use crate::modules::student::domain::StudentRepository;
use crate::shared::{
    application::use_case::Query,
    errors::{AppError, AppResult},
};

use super::{query::GetStudentSummaryQuery, result::StudentSummary};

/// Query handler projecting a student and their total credits
pub struct GetStudentSummaryHandler {
    student_repository: Arc<dyn StudentRepository>,
}

impl GetStudentSummaryHandler {
    pub fn new(student_repository: Arc<dyn StudentRepository>) -> Self {
        Self { student_repository }
    }
}

#[async_trait]
impl Query<GetStudentSummaryQuery, StudentSummary> for GetStudentSummaryHandler {
    async fn execute(&self, query: GetStudentSummaryQuery) -> AppResult<StudentSummary> {
        if query.student_id <= 0 {
            return Err(AppError::InvalidInput(format!(
                "Student id must be positive, got {}",
                query.student_id
            )));
        }

        let Some(student) = self
            .student_repository
            .find_with_enrollments(query.student_id)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "Student with id {} not found",
                query.student_id
            )));
        };

        let summary = StudentSummary::from(student);
        log_debug!(
            "Student {} has {} credits over {} enrollments",
            summary.id,
            summary.total_credits,
            summary.enrollments.len()
        );

        Ok(summary)
    }
}
