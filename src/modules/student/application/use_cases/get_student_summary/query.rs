/// Query for a single student's credit summary
#[derive(Debug, Clone, Copy)]
pub struct GetStudentSummaryQuery {
    pub student_id: i32,
}

impl GetStudentSummaryQuery {
    pub fn new(student_id: i32) -> Self {
        Self { student_id }
    }
}
