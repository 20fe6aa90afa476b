mod command;
mod handler;
mod result;

pub use command::{ImportStudentsCommand, RecordSource};
pub use handler::ImportStudentsHandler;
pub use result::{ImportOutcome, ImportStudentsResult};
