pub mod student_record;

pub use student_record::StudentRecord;
