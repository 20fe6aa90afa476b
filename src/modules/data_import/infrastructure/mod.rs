pub mod csv_source;
pub mod student_import_repository_impl;

pub use csv_source::{read_student_file, read_student_records};
pub use student_import_repository_impl::{insert_statement, StudentImportRepositoryImpl};
