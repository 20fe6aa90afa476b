/// Diesel-based implementation of StudentImportRepository
///
/// The payload arrives already escaped; this layer checks the table name,
/// re-parses the payload to confirm it is well formed, and runs one
/// `INSERT ... VALUES` statement through `sql_query`.
use async_trait::async_trait;
use diesel::RunQueryDsl;
use std::time::Instant;

use crate::modules::data_import::domain::{
    verify_payload, BulkInsertPayload, StudentImportRepository, STUDENT_COLUMNS,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{with_connection, SharedDatabaseState};
use crate::shared::utils::logger::LogContext;
use crate::shared::utils::Validator;

pub struct StudentImportRepositoryImpl {
    db: SharedDatabaseState,
}

impl StudentImportRepositoryImpl {
    pub fn new(db: SharedDatabaseState) -> Self {
        Self { db }
    }
}

/// The full statement for `payload`, or an error if it must not be sent
pub fn insert_statement(table: &str, payload: &BulkInsertPayload) -> AppResult<String> {
    if payload.is_empty() {
        return Err(AppError::InvalidInput(
            "Payload is empty; nothing to insert".to_string(),
        ));
    }
    Validator::validate_table_name(table)?;
    verify_payload(payload.as_str(), payload.tuple_count(), STUDENT_COLUMNS.len())?;

    Ok(format!(
        "INSERT INTO {} ({}) VALUES {}",
        table,
        STUDENT_COLUMNS.join(", "),
        payload.as_str()
    ))
}

#[async_trait]
impl StudentImportRepository for StudentImportRepositoryImpl {
    async fn insert_payload(&self, table: &str, payload: &BulkInsertPayload) -> AppResult<usize> {
        let statement = insert_statement(table, payload)?;
        let table = table.to_string();

        with_connection(&self.db, move |conn| {
            LogContext::db_operation("bulk insert", &table, None);
            let start = Instant::now();

            let affected = diesel::sql_query(statement).execute(conn).map_err(|e| {
                AppError::DatabaseError(format!("Bulk insert into {} failed: {}", table, e))
            })?;

            LogContext::db_operation("bulk insert", &table, Some(start.elapsed()));
            Ok(affected)
        })
        .await
    }
}
