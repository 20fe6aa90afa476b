// Bounded contexts
pub mod course;
pub mod data_import;
pub mod student;
