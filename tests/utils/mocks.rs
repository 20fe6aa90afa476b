/// mockall doubles for the repository ports
use async_trait::async_trait;
use enrollment_lib::modules::course::{Course, CourseRepository, Department};
use enrollment_lib::modules::data_import::{BulkInsertPayload, StudentImportRepository};
use enrollment_lib::modules::student::{Student, StudentRepository};
use enrollment_lib::shared::application::PaginationParams;
use enrollment_lib::shared::errors::AppResult;
use mockall::mock;

mock! {
    pub StudentRepo {}

    #[async_trait]
    impl StudentRepository for StudentRepo {
        async fn find_with_enrollments(&self, id: i32) -> AppResult<Option<Student>>;
        async fn search_by_name(
            &self,
            name_fragment: &str,
            pagination: &PaginationParams,
        ) -> AppResult<(Vec<Student>, u64)>;
    }
}

mock! {
    pub CourseRepo {}

    #[async_trait]
    impl CourseRepository for CourseRepo {
        async fn list_with_departments(&self) -> AppResult<Vec<(Course, Department)>>;
    }
}

mock! {
    pub ImportRepo {}

    #[async_trait]
    impl StudentImportRepository for ImportRepo {
        async fn insert_payload(&self, table: &str, payload: &BulkInsertPayload) -> AppResult<usize>;
    }
}
