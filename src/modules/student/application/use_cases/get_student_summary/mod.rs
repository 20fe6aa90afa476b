mod handler;
mod query;
mod result;

pub use handler::GetStudentSummaryHandler;
pub use query::GetStudentSummaryQuery;
pub use result::{EnrollmentLine, StudentSummary};
