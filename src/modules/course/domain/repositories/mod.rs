pub mod course_repository;
