//! Bulk upload of students from a CSV file
//!
//! Rows are read in file order, normalized, composed into one escaped
//! `VALUES` payload and sent as a single insert.
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{
    ImportOutcome, ImportStudentsCommand, ImportStudentsHandler, ImportStudentsResult,
    RecordSource,
};
pub use domain::{BulkInsertPayload, StudentImportRepository, StudentRecord};
pub use infrastructure::StudentImportRepositoryImpl;
