pub mod import_students;
