use async_trait::async_trait;
use diesel::prelude::*;

use super::models::{CourseModel, DepartmentModel};
use crate::modules::course::domain::{Course, CourseRepository, Department};
use crate::schema::{courses, departments};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{with_connection, SharedDatabaseState};
use crate::shared::utils::logger::TimedOperation;

pub struct CourseRepositoryImpl {
    db: SharedDatabaseState,
}

impl CourseRepositoryImpl {
    pub fn new(db: SharedDatabaseState) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseRepository for CourseRepositoryImpl {
    async fn list_with_departments(&self) -> AppResult<Vec<(Course, Department)>> {
        let timer = TimedOperation::new("list_courses");
        let rows: Vec<(CourseModel, DepartmentModel)> = with_connection(&self.db, |conn| {
            courses::table
                .inner_join(departments::table)
                .select((CourseModel::as_select(), DepartmentModel::as_select()))
                .order(courses::id.asc())
                .load(conn)
                .map_err(|e| AppError::DatabaseError(format!("Failed to list courses: {}", e)))
        })
        .await?;

        let listing = rows
            .into_iter()
            .map(|(course, department)| Ok((course.into_domain()?, department.into_domain())))
            .collect::<AppResult<Vec<_>>>()?;

        timer.finish_with_info(&format!("{} courses", listing.len()));
        Ok(listing)
    }
}
