pub mod use_cases;

pub use use_cases::import_students::{
    ImportOutcome, ImportStudentsCommand, ImportStudentsHandler, ImportStudentsResult,
    RecordSource,
};
