mod handler;
mod query;
mod result;

pub use handler::SearchStudentsHandler;
pub use query::SearchStudentsQuery;
pub use result::StudentSearchHit;
