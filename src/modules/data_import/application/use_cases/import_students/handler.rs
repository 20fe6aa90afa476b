use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::data_import::domain::{
    build_student_payload, parse_payload, StudentImportRepository, StudentRecord,
};
use crate::modules::data_import::infrastructure::{read_student_file, read_student_records};
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
    utils::{logger::TimedOperation, Validator},
};
use crate::{log_info, log_warn};

use super::{
    command::{ImportStudentsCommand, RecordSource},
    result::{ImportOutcome, ImportStudentsResult},
};

/// Use case handler: CSV rows in, one multi-row insert out
pub struct ImportStudentsHandler {
    import_repository: Arc<dyn StudentImportRepository>,
}

impl ImportStudentsHandler {
    pub fn new(import_repository: Arc<dyn StudentImportRepository>) -> Self {
        Self { import_repository }
    }

    fn load(source: &RecordSource) -> AppResult<Vec<StudentRecord>> {
        match source {
            RecordSource::File(path) => read_student_file(path),
            RecordSource::Text(text) => read_student_records(text.as_bytes()),
        }
    }

    /// Normalize every row, naming the first bad one by its data line number
    fn normalize(records: Vec<StudentRecord>) -> AppResult<Vec<StudentRecord>> {
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                record.normalized().map_err(|e| {
                    AppError::InvalidInput(format!("Row {}: {}", index + 1, e))
                })
            })
            .collect()
    }
}

#[async_trait]
impl UseCase<ImportStudentsCommand, ImportStudentsResult> for ImportStudentsHandler {
    async fn execute(&self, command: ImportStudentsCommand) -> AppResult<ImportStudentsResult> {
        let timer = TimedOperation::new("import_students");
        Validator::validate_table_name(&command.table)?;

        let records = Self::normalize(Self::load(&command.source)?)?;
        let records_read = records.len();
        let payload = build_student_payload(&records);

        let outcome = if payload.is_empty() {
            log_warn!("No student rows found; skipping insert into {}", command.table);
            ImportOutcome::NothingToInsert
        } else if command.dry_run {
            ImportOutcome::Preview {
                tuples: parse_payload(payload.as_str())?,
            }
        } else {
            let rows_affected = self
                .import_repository
                .insert_payload(&command.table, &payload)
                .await?;

            if rows_affected != payload.tuple_count() {
                log_warn!(
                    "Inserted {} rows into {} from {} tuples",
                    rows_affected,
                    command.table,
                    payload.tuple_count()
                );
            }
            ImportOutcome::Inserted { rows_affected }
        };

        log_info!(
            "Import into {} finished: {} records read, {}",
            command.table,
            records_read,
            match &outcome {
                ImportOutcome::NothingToInsert => "nothing to insert".to_string(),
                ImportOutcome::Preview { tuples } => format!("dry run of {} tuples", tuples.len()),
                ImportOutcome::Inserted { rows_affected } => format!("{} rows inserted", rows_affected),
            }
        );
        timer.finish_with_info(&format!("{} records", records_read));

        Ok(ImportStudentsResult::new(command.table, records_read, outcome))
    }
}
