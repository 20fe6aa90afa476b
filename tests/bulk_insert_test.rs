/// Bulk upload tests - the insert path against a real database
///
/// Tests cover:
/// - Rows affected matches rows in the file
/// - Escaped names are stored verbatim
/// - Unreachable store is distinct from an empty file
///
/// Requires TEST_DATABASE_URL for the database cases; skipped otherwise.
#[macro_use]
mod utils;

use std::sync::Arc;

use enrollment_lib::modules::data_import::{
    ImportOutcome, ImportStudentsCommand, ImportStudentsHandler, RecordSource,
    StudentImportRepositoryImpl,
};
use enrollment_lib::modules::student::{StudentRepository, StudentRepositoryImpl};
use enrollment_lib::shared::application::UseCase;
use enrollment_lib::shared::DatabaseState;
use utils::db;

const FOUR_STUDENTS: &str = "\
first_name,last_name,enrollment_date
Carson,Alexander,2024-09-01
Meredith,Alonso,2024-09-01
Arturo,Anand,2025-01-15
Gytis,Barzdukas,2025-01-15
";

fn command(csv: &str) -> ImportStudentsCommand {
    ImportStudentsCommand::new(RecordSource::Text(csv.to_string()))
}

#[tokio::test]
async fn four_row_file_inserts_four_students() {
    let _guard = db::acquire_test_lock();
    let pool = require_test_db!();

    let repo = StudentImportRepositoryImpl::new(db::shared_state(&pool));
    let result = ImportStudentsHandler::new(Arc::new(repo))
        .execute(command(FOUR_STUDENTS))
        .await
        .unwrap();

    assert_eq!(result.outcome, ImportOutcome::Inserted { rows_affected: 4 });
    assert_eq!(db::count_rows(&pool, "students"), 4);
}

#[tokio::test]
async fn quoted_names_round_trip_through_the_table() {
    let _guard = db::acquire_test_lock();
    let pool = require_test_db!();

    let csv = "first_name,last_name,enrollment_date\n\
               Peggy,O'Brien,2024-09-01\n\
               \"Anne, Jr\",D'Arcy,2024-09-02\n";

    let repo = StudentImportRepositoryImpl::new(db::shared_state(&pool));
    let result = ImportStudentsHandler::new(Arc::new(repo))
        .execute(command(csv))
        .await
        .unwrap();
    assert_eq!(result.rows_affected(), 2);

    let students = StudentRepositoryImpl::new(db::shared_state(&pool));
    let peggy = students.find_with_enrollments(1).await.unwrap().unwrap();
    assert_eq!(peggy.last_name, "O'Brien");

    let anne = students.find_with_enrollments(2).await.unwrap().unwrap();
    assert_eq!(anne.first_name, "Anne, Jr");
    assert_eq!(anne.last_name, "D'Arcy");
}

#[tokio::test]
async fn empty_file_leaves_the_table_untouched() {
    let _guard = db::acquire_test_lock();
    let pool = require_test_db!();

    let repo = StudentImportRepositoryImpl::new(db::shared_state(&pool));
    let result = ImportStudentsHandler::new(Arc::new(repo))
        .execute(command("first_name,last_name,enrollment_date\n"))
        .await
        .unwrap();

    assert_eq!(result.outcome, ImportOutcome::NothingToInsert);
    assert_eq!(db::count_rows(&pool, "students"), 0);
}

#[tokio::test]
async fn unreachable_store_fails_instead_of_reporting_zero_rows() {
    let state = DatabaseState::unavailable("connection refused").into_shared();
    let repo = StudentImportRepositoryImpl::new(state);

    let err = ImportStudentsHandler::new(Arc::new(repo))
        .execute(command(FOUR_STUDENTS))
        .await
        .unwrap_err();

    assert!(err.is_unavailable());
}

#[tokio::test]
async fn empty_file_with_unreachable_store_is_still_nothing_to_insert() {
    let state = DatabaseState::unavailable("connection refused").into_shared();
    let repo = StudentImportRepositoryImpl::new(state);

    let result = ImportStudentsHandler::new(Arc::new(repo))
        .execute(command("first_name,last_name,enrollment_date\n"))
        .await
        .unwrap();

    assert_eq!(result.outcome, ImportOutcome::NothingToInsert);
}
