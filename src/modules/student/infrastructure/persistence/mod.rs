pub mod mapper;
pub mod student_repository_impl;

pub use student_repository_impl::StudentRepositoryImpl;
