pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod routes;

// Re-exports for easy external access
pub use application::{
    GetStudentSummaryHandler, GetStudentSummaryQuery, SearchStudentsHandler, SearchStudentsQuery,
    StudentSearchHit, StudentSummary,
};
pub use domain::{Enrollment, Grade, Student, StudentRepository};
pub use infrastructure::StudentRepositoryImpl;
