use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::student::domain::StudentRepository;
use crate::shared::{
    application::{use_case::Query, PaginatedResult},
    errors::AppResult,
    utils::Validator,
};

use super::{query::SearchStudentsQuery, result::StudentSearchHit};

pub struct SearchStudentsHandler {
    student_repository: Arc<dyn StudentRepository>,
}

impl SearchStudentsHandler {
    pub fn new(student_repository: Arc<dyn StudentRepository>) -> Self {
        Self { student_repository }
    }
}

#[async_trait]
impl Query<SearchStudentsQuery, PaginatedResult<StudentSearchHit>> for SearchStudentsHandler {
    async fn execute(
        &self,
        query: SearchStudentsQuery,
    ) -> AppResult<PaginatedResult<StudentSearchHit>> {
        Validator::validate_search_query(&query.name_fragment)?;
        Validator::validate_pagination(query.pagination.page, query.pagination.page_size)?;

        let (students, total) = self
            .student_repository
            .search_by_name(&query.name_fragment, &query.pagination)
            .await?;

        Ok(PaginatedResult::new(students, total, &query.pagination).map(StudentSearchHit::from))
    }
}
