use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query as QueryParams, State,
    },
    Json,
};
use serde::Deserialize;

use super::application::{
    GetStudentSummaryQuery, SearchStudentsQuery, StudentSearchHit, StudentSummary,
};
use crate::server::AppState;
use crate::shared::application::{PaginatedResult, PaginationParams, Query};
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStudentsParams {
    pub search: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// `GET /api/students/{id}`
pub async fn get_student_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<StudentSummary>> {
    let Path(id) = id.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    let summary = state
        .student_summary
        .execute(GetStudentSummaryQuery::new(id))
        .await?;

    Ok(Json(summary))
}

/// `GET /api/students?search=&page=&pageSize=`
pub async fn search_students_handler(
    State(state): State<AppState>,
    params: Result<QueryParams<SearchStudentsParams>, QueryRejection>,
) -> AppResult<Json<PaginatedResult<StudentSearchHit>>> {
    let QueryParams(params) = params.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let pagination = PaginationParams::from_query(params.page, params.page_size)?;

    let hits = state
        .student_search
        .execute(SearchStudentsQuery::new(
            params.search.unwrap_or_default(),
            pagination,
        ))
        .await?;

    Ok(Json(hits))
}
