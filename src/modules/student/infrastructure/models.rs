use crate::modules::student::domain::value_objects::Grade;
use crate::schema::{enrollments, students};
use chrono::NaiveDate;
use diesel::prelude::*;

// ============= STUDENT MODELS =============

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StudentModel {
    pub id: i32,
    pub last_name: String,
    pub first_name: String,
    pub enrollment_date: NaiveDate,
}


// ============= ENROLLMENT MODELS =============

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(StudentModel, foreign_key = student_id))]
#[diesel(table_name = enrollments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EnrollmentModel {
    pub id: i32,
    pub student_id: i32,
    pub course_id: Option<i32>,
    pub grade: Option<Grade>,
}

