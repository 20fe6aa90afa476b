pub mod use_cases;

pub use use_cases::{
    EnrollmentLine, GetStudentSummaryHandler, GetStudentSummaryQuery, SearchStudentsHandler,
    SearchStudentsQuery, StudentSearchHit, StudentSummary,
};
