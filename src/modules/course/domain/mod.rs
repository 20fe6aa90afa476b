pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::course::{Course, Department};
pub use repositories::course_repository::CourseRepository;
