/// CSV reading for student upload files
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::modules::data_import::domain::StudentRecord;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

/// Deserialize every row of a headed CSV stream, in file order
pub fn read_student_records<R: Read>(reader: R) -> AppResult<Vec<StudentRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in reader.deserialize::<StudentRecord>() {
        records.push(row?);
    }

    Ok(records)
}

pub fn read_student_file(path: &Path) -> AppResult<Vec<StudentRecord>> {
    let file = File::open(path).map_err(|e| {
        AppError::InvalidInput(format!("Cannot open '{}': {}", path.display(), e))
    })?;

    let records = read_student_records(file)?;
    LogContext::import_progress(records.len(), &path.display().to_string());
    Ok(records)
}
