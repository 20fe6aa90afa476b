use std::collections::HashMap;

use crate::modules::course::infrastructure::models::CourseModel;
use crate::modules::student::domain::{Enrollment, Student};
use crate::modules::student::infrastructure::models::{EnrollmentModel, StudentModel};
use crate::shared::errors::AppResult;

pub type EnrollmentRow = (EnrollmentModel, Option<CourseModel>);

pub fn to_enrollment(row: EnrollmentRow) -> AppResult<Enrollment> {
    let (enrollment, course) = row;
    let course = course.map(CourseModel::into_domain).transpose()?;

    Ok(Enrollment {
        id: enrollment.id,
        student_id: enrollment.student_id,
        course_id: enrollment.course_id,
        grade: enrollment.grade,
        course,
    })
}

pub fn to_student(model: StudentModel, rows: Vec<EnrollmentRow>) -> AppResult<Student> {
    let enrollments = rows
        .into_iter()
        .map(to_enrollment)
        .collect::<AppResult<Vec<_>>>()?;

    Ok(
        Student::new(model.id, model.last_name, model.first_name, model.enrollment_date)
            .with_enrollments(enrollments),
    )
}

/// Attach enrollment rows to their students, keeping the students' order
pub fn to_students(models: Vec<StudentModel>, rows: Vec<EnrollmentRow>) -> AppResult<Vec<Student>> {
    let mut by_student: HashMap<i32, Vec<EnrollmentRow>> = HashMap::new();
    for row in rows {
        by_student.entry(row.0.student_id).or_default().push(row);
    }

    models
        .into_iter()
        .map(|model| {
            let rows = by_student.remove(&model.id).unwrap_or_default();
            to_student(model, rows)
        })
        .collect()
}
