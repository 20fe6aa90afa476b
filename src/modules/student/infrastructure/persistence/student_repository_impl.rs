/// Diesel-based implementation of StudentRepository
///
/// Enrollments are loaded with a LEFT JOIN on courses so that an enrollment
/// whose course_id is NULL still comes back, with no course attached.
use async_trait::async_trait;
use diesel::prelude::*;

use super::mapper::{self, EnrollmentRow};
use crate::modules::course::infrastructure::models::CourseModel;
use crate::modules::student::domain::{Student, StudentRepository};
use crate::modules::student::infrastructure::models::{EnrollmentModel, StudentModel};
use crate::schema::{courses, enrollments, students};
use crate::shared::application::PaginationParams;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{with_connection, DbConnection, SharedDatabaseState};
use crate::shared::utils::logger::{LogContext, TimedOperation};

pub struct StudentRepositoryImpl {
    db: SharedDatabaseState,
}

impl StudentRepositoryImpl {
    pub fn new(db: SharedDatabaseState) -> Self {
        Self { db }
    }

    fn load_enrollment_rows(
        conn: &mut DbConnection,
        student_models: &[StudentModel],
    ) -> AppResult<Vec<EnrollmentRow>> {
        EnrollmentModel::belonging_to(student_models)
            .left_join(courses::table)
            .select((
                EnrollmentModel::as_select(),
                courses::all_columns.nullable(),
            ))
            .order(enrollments::id.asc())
            .load::<(EnrollmentModel, Option<CourseModel>)>(conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to load enrollments: {}", e)))
    }
}

/// `%fragment%` with LIKE wildcards in the fragment taken literally
fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for c in fragment.trim().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl StudentRepository for StudentRepositoryImpl {
    async fn find_with_enrollments(&self, id: i32) -> AppResult<Option<Student>> {
        let timer = TimedOperation::new("find_student_with_enrollments");

        let found = with_connection(&self.db, move |conn| {
            let student: Option<StudentModel> = students::table
                .find(id)
                .select(StudentModel::as_select())
                .first(conn)
                .optional()
                .map_err(|e| {
                    AppError::DatabaseError(format!("Failed to load student {}: {}", id, e))
                })?;

            let Some(student) = student else {
                return Ok(None);
            };

            let rows = Self::load_enrollment_rows(conn, std::slice::from_ref(&student))?;
            mapper::to_student(student, rows).map(Some)
        })
        .await?;

        match found {
            Some(_) => timer.finish(),
            None => timer.finish_with_info("not found"),
        };
        Ok(found)
    }

    async fn search_by_name(
        &self,
        name_fragment: &str,
        pagination: &PaginationParams,
    ) -> AppResult<(Vec<Student>, u64)> {
        LogContext::search_operation(name_fragment, None);
        let pattern = contains_pattern(name_fragment);
        let (offset, limit) = (pagination.offset(), pagination.limit());

        let (found, total) = with_connection(&self.db, move |conn| {
            let total: i64 = students::table
                .filter(
                    students::last_name
                        .ilike(&pattern)
                        .or(students::first_name.ilike(&pattern)),
                )
                .count()
                .get_result(conn)
                .map_err(|e| AppError::DatabaseError(format!("Failed to count students: {}", e)))?;

            let models: Vec<StudentModel> = students::table
                .filter(
                    students::last_name
                        .ilike(&pattern)
                        .or(students::first_name.ilike(&pattern)),
                )
                .select(StudentModel::as_select())
                .order((students::last_name.asc(), students::first_name.asc(), students::id.asc()))
                .offset(offset)
                .limit(limit)
                .load(conn)
                .map_err(|e| AppError::DatabaseError(format!("Failed to search students: {}", e)))?;

            let rows = Self::load_enrollment_rows(conn, &models)?;
            Ok((mapper::to_students(models, rows)?, total))
        })
        .await?;

        LogContext::search_operation(name_fragment, Some(found.len()));
        Ok((found, u64::try_from(total).unwrap_or_default()))
    }
}
