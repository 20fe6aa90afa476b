pub mod student_import_repository;

pub use student_import_repository::StudentImportRepository;
