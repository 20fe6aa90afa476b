/// Student upload tests - use case driven with a mocked insert repository
///
/// Tests cover:
/// - One insert per upload, rows affected reported
/// - Empty file skips the insert
/// - Dry run previews without inserting
/// - Quote escaping reaches the repository
/// - Bad rows, bad table names and an unreachable store
#[macro_use]
mod utils;

use std::io::Write;
use std::sync::Arc;

use enrollment_lib::modules::data_import::{
    ImportOutcome, ImportStudentsCommand, ImportStudentsHandler, RecordSource,
};
use enrollment_lib::shared::application::UseCase;
use enrollment_lib::shared::errors::AppError;

use utils::mocks::MockImportRepo;

const FOUR_STUDENTS: &str = "\
first_name,last_name,enrollment_date
Carson,Alexander,2024-09-01
Meredith,Alonso,2024-09-01
Arturo,Anand,2025-01-15
Gytis,Barzdukas,2025-01-15
";

fn text(csv: &str) -> ImportStudentsCommand {
    ImportStudentsCommand::new(RecordSource::Text(csv.to_string()))
}

#[tokio::test]
async fn four_rows_become_one_insert_of_four_tuples() {
    let mut repo = MockImportRepo::new();
    repo.expect_insert_payload()
        .withf(|table, payload| table.to_string() == "students" && payload.tuple_count() == 4)
        .times(1)
        .returning(|_, payload| Ok(payload.tuple_count()));

    let result = ImportStudentsHandler::new(Arc::new(repo))
        .execute(text(FOUR_STUDENTS))
        .await
        .unwrap();

    assert_eq!(result.records_read, 4);
    assert_eq!(result.outcome, ImportOutcome::Inserted { rows_affected: 4 });
    assert_eq!(result.rows_affected(), 4);
}

#[tokio::test]
async fn payload_has_no_trailing_separator() {
    let mut repo = MockImportRepo::new();
    repo.expect_insert_payload()
        .withf(|_, payload| {
            payload.as_str()
                == "('Alexander','Carson','2024-09-01'),('Alonso','Meredith','2024-09-01')"
        })
        .times(1)
        .returning(|_, _| Ok(2));

    let csv = "first_name,last_name,enrollment_date\n\
               Carson,Alexander,2024-09-01\n\
               Meredith,Alonso,2024-09-01\n";

    let result = ImportStudentsHandler::new(Arc::new(repo))
        .execute(text(csv))
        .await
        .unwrap();

    assert_eq!(result.rows_affected(), 2);
}

#[tokio::test]
async fn header_only_file_issues_no_insert() {
    let mut repo = MockImportRepo::new();
    repo.expect_insert_payload().never();

    let result = ImportStudentsHandler::new(Arc::new(repo))
        .execute(text("first_name,last_name,enrollment_date\n"))
        .await
        .unwrap();

    assert_eq!(result.records_read, 0);
    assert_eq!(result.outcome, ImportOutcome::NothingToInsert);
    assert_eq!(result.rows_affected(), 0);
}

#[tokio::test]
async fn dry_run_previews_tuples_in_file_order() {
    let mut repo = MockImportRepo::new();
    repo.expect_insert_payload().never();

    let result = ImportStudentsHandler::new(Arc::new(repo))
        .execute(text(FOUR_STUDENTS).dry_run(true))
        .await
        .unwrap();

    let ImportOutcome::Preview { tuples } = result.outcome else {
        panic!("expected a preview, got {:?}", result.outcome);
    };
    assert_eq!(tuples.len(), 4);
    assert_eq!(tuples[0], vec!["Alexander", "Carson", "2024-09-01"]);
    assert_eq!(tuples[3], vec!["Barzdukas", "Gytis", "2025-01-15"]);
}

#[tokio::test]
async fn embedded_quotes_are_escaped_before_the_insert() {
    let mut repo = MockImportRepo::new();
    repo.expect_insert_payload()
        .withf(|_, payload| payload.as_str() == "('O''Brien','Peggy','2024-09-01')")
        .times(1)
        .returning(|_, _| Ok(1));

    let csv = "first_name,last_name,enrollment_date\nPeggy,O'Brien,2024-09-01\n";
    let result = ImportStudentsHandler::new(Arc::new(repo))
        .execute(text(csv))
        .await
        .unwrap();

    assert_eq!(result.rows_affected(), 1);
}

#[tokio::test]
async fn custom_table_is_passed_to_the_repository() {
    let mut repo = MockImportRepo::new();
    repo.expect_insert_payload()
        .withf(|table, _| table.to_string() == "staging.students")
        .times(1)
        .returning(|_, payload| Ok(payload.tuple_count()));

    let result = ImportStudentsHandler::new(Arc::new(repo))
        .execute(text(FOUR_STUDENTS).into_table("staging.students"))
        .await
        .unwrap();

    assert_eq!(result.table, "staging.students");
    assert_eq!(result.rows_affected(), 4);
}

#[tokio::test]
async fn unsafe_table_name_is_rejected_before_reading() {
    let mut repo = MockImportRepo::new();
    repo.expect_insert_payload().never();

    let err = ImportStudentsHandler::new(Arc::new(repo))
        .execute(text(FOUR_STUDENTS).into_table("students; DROP TABLE students"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn bad_row_is_reported_by_position_and_nothing_is_inserted() {
    let mut repo = MockImportRepo::new();
    repo.expect_insert_payload().never();

    let csv = "first_name,last_name,enrollment_date\n\
               Carson,Alexander,2024-09-01\n\
               ,Alonso,2024-09-01\n";

    let err = ImportStudentsHandler::new(Arc::new(repo))
        .execute(text(csv))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Row 2"), "{err}");
}

#[tokio::test]
async fn unparseable_date_fails_the_upload() {
    let mut repo = MockImportRepo::new();
    repo.expect_insert_payload().never();

    let csv = "first_name,last_name,enrollment_date\nCarson,Alexander,09/01/2024\n";
    let err = ImportStudentsHandler::new(Arc::new(repo))
        .execute(text(csv))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn unreachable_store_is_reported_as_unavailable() {
    let mut repo = MockImportRepo::new();
    repo.expect_insert_payload()
        .returning(|_, _| Err(AppError::ServiceUnavailable("connection refused".to_string())));

    let err = ImportStudentsHandler::new(Arc::new(repo))
        .execute(text(FOUR_STUDENTS))
        .await
        .unwrap_err();

    assert!(err.is_unavailable());
}

#[tokio::test]
async fn reads_records_from_a_file() {
    let path = std::env::temp_dir().join(format!("students-{}.csv", std::process::id()));
    std::fs::File::create(&path)
        .and_then(|mut file| file.write_all(FOUR_STUDENTS.as_bytes()))
        .unwrap();

    let mut repo = MockImportRepo::new();
    repo.expect_insert_payload()
        .times(1)
        .returning(|_, payload| Ok(payload.tuple_count()));

    let result = ImportStudentsHandler::new(Arc::new(repo))
        .execute(ImportStudentsCommand::new(RecordSource::File(path.clone())))
        .await;
    std::fs::remove_file(&path).ok();

    assert_eq!(result.unwrap().rows_affected(), 4);
}

#[tokio::test]
async fn missing_file_is_an_input_error() {
    let mut repo = MockImportRepo::new();
    repo.expect_insert_payload().never();

    let err = ImportStudentsHandler::new(Arc::new(repo))
        .execute(ImportStudentsCommand::new(RecordSource::File(
            "/nonexistent/students.csv".into(),
        )))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
}
