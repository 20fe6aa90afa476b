use crate::modules::course::domain::{Course, Department};
use crate::schema::{courses, departments};
use crate::shared::errors::AppResult;
use diesel::prelude::*;

// ============= DEPARTMENT MODELS =============

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = departments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DepartmentModel {
    pub id: i32,
    pub name: String,
}


impl DepartmentModel {
    pub fn into_domain(self) -> Department {
        Department {
            id: self.id,
            name: self.name,
        }
    }
}

// ============= COURSE MODELS =============

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(DepartmentModel, foreign_key = department_id))]
#[diesel(table_name = courses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CourseModel {
    pub id: i32,
    pub title: String,
    pub credits: i32,
    pub department_id: i32,
}


impl CourseModel {
    /// Rows that violate the credits check are rejected rather than clamped
    pub fn into_domain(self) -> AppResult<Course> {
        Course::new(self.id, self.title, self.credits, self.department_id)
    }
}
