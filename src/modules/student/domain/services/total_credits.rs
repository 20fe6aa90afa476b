use crate::modules::student::domain::entities::enrollment::Enrollment;
use crate::shared::domain::{accumulate, Accumulator};

/// Running credit sum. Saturates instead of wrapping.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CreditTotal(u32);

impl Accumulator for CreditTotal {
    type Contribution = u32;
    type Output = u32;

    fn combine(&mut self, credits: u32) {
        self.0 = self.0.saturating_add(credits);
    }

    fn finish(self) -> u32 {
        self.0
    }
}

/// Total credits across `enrollments`.
///
/// No enrollment list at all counts as zero enrollments, and an enrollment
/// without a course contributes nothing.
pub fn total_credits(enrollments: Option<&[Enrollment]>) -> u32 {
    accumulate::<CreditTotal, _, _>(enrollments.unwrap_or_default(), Enrollment::credits)
}
