pub mod entities;
pub mod repositories;
pub mod services;

pub use entities::StudentRecord;
pub use repositories::StudentImportRepository;
pub use services::{
    build_student_payload, parse_payload, verify_payload, BulkInsertPayload, STUDENT_COLUMNS,
};
