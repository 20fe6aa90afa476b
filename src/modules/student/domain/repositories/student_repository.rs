/// Read access to students and their enrollments
use async_trait::async_trait;

use crate::modules::student::domain::entities::student::Student;
use crate::shared::application::PaginationParams;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Student with enrollments (and their courses) loaded; `None` if unknown
    async fn find_with_enrollments(&self, id: i32) -> AppResult<Option<Student>>;

    /// Page of students whose first or last name contains `name_fragment`
    /// (case-insensitive), enrollments loaded, plus the total match count
    async fn search_by_name(
        &self,
        name_fragment: &str,
        pagination: &PaginationParams,
    ) -> AppResult<(Vec<Student>, u64)>;
}
