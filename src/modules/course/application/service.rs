use serde::Serialize;
use std::sync::Arc;

use crate::modules::course::domain::CourseRepository;
use crate::shared::errors::AppResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseListing {
    pub id: i32,
    pub title: String,
    pub credits: u32,
    pub department: String,
}

pub struct CourseService {
    course_repo: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(course_repo: Arc<dyn CourseRepository>) -> Self {
        Self { course_repo }
    }

    pub async fn list_courses(&self) -> AppResult<Vec<CourseListing>> {
        let courses = self.course_repo.list_with_departments().await?;

        Ok(courses
            .into_iter()
            .map(|(course, department)| CourseListing {
                id: course.id,
                credits: course.credits(),
                title: course.title,
                department: department.name,
            })
            .collect())
    }
}
