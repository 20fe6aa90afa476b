pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod routes;

// Re-exports for easy external access
pub use application::service::{CourseListing, CourseService};
pub use domain::{Course, CourseRepository, Department};
pub use infrastructure::CourseRepositoryImpl;
