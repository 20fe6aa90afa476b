pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::enrollment::Enrollment;
pub use entities::student::Student;
pub use repositories::student_repository::StudentRepository;
pub use value_objects::Grade;
