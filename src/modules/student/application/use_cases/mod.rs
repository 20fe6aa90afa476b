pub mod get_student_summary;
pub mod search_students;

pub use get_student_summary::{
    EnrollmentLine, GetStudentSummaryHandler, GetStudentSummaryQuery, StudentSummary,
};
pub use search_students::{SearchStudentsHandler, SearchStudentsQuery, StudentSearchHit};
