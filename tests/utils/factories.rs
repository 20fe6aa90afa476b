/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::NaiveDate;
use enrollment_lib::modules::course::{Course, Department};
use enrollment_lib::modules::student::{Enrollment, Grade, Student};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn department(id: i32, name: &str) -> Department {
    Department {
        id,
        name: name.to_string(),
    }
}

pub fn course(id: i32, title: &str, credits: i32) -> Course {
    Course::new(id, title, credits, 1).expect("valid course")
}

pub struct StudentFactory {
    id: i32,
    last_name: String,
    first_name: String,
    enrollment_date: NaiveDate,
    enrollments: Option<Vec<Enrollment>>,
}

impl Default for StudentFactory {
    fn default() -> Self {
        Self {
            id: 1,
            last_name: "Alexander".to_string(),
            first_name: "Carson".to_string(),
            enrollment_date: date(2024, 9, 1),
            enrollments: None,
        }
    }
}

impl StudentFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, first_name: &str, last_name: &str) -> Self {
        self.first_name = first_name.to_string();
        self.last_name = last_name.to_string();
        self
    }

    pub fn enrolled_in(mut self, course: Course, grade: Option<Grade>) -> Self {
        let enrollments = self.enrollments.get_or_insert_with(Vec::new);
        let mut enrollment = Enrollment::new(enrollments.len() as i32 + 1, self.id, Some(course));
        if let Some(grade) = grade {
            enrollment = enrollment.with_grade(grade);
        }
        enrollments.push(enrollment);
        self
    }

    /// An enrollment whose course is gone
    pub fn with_orphan_enrollment(mut self) -> Self {
        let enrollments = self.enrollments.get_or_insert_with(Vec::new);
        enrollments.push(Enrollment::new(enrollments.len() as i32 + 1, self.id, None));
        self
    }

    pub fn build(self) -> Student {
        let student = Student::new(
            self.id,
            self.last_name,
            self.first_name,
            self.enrollment_date,
        );
        match self.enrollments {
            Some(enrollments) => student.with_enrollments(enrollments),
            None => student,
        }
    }
}
