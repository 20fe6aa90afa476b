pub mod student_repository;
