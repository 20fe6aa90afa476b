pub mod payload_builder;
pub mod payload_parser;

pub use payload_builder::{
    build_student_payload, quote_literal, BulkInsertPayload, PayloadBuffer, STUDENT_COLUMNS,
};
pub use payload_parser::{parse_payload, verify_payload};
