use async_trait::async_trait;

use crate::modules::course::domain::entities::course::{Course, Department};
use crate::shared::errors::AppResult;

#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// All courses ordered by id, each with its department
    async fn list_with_departments(&self) -> AppResult<Vec<(Course, Department)>>;
}
