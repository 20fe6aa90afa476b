pub mod grade;

pub use grade::Grade;
