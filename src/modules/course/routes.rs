use axum::{extract::State, Json};

use super::application::service::CourseListing;
use crate::server::AppState;
use crate::shared::errors::AppResult;

/// `GET /api/courses`
pub async fn list_courses_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CourseListing>>> {
    let courses = state.course_service.list_courses().await?;
    Ok(Json(courses))
}
