pub mod enrollment;
pub mod student;
