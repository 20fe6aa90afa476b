//! Multi-row `VALUES` payload for a single bulk insert.
//!
//! Each record becomes `('Last','First','2024-09-01')`; tuples are joined by
//! commas with no trailing separator. Every field is a single-quoted literal
//! with embedded quotes doubled, so no field can close its literal early.

use crate::modules::data_import::domain::entities::StudentRecord;
use crate::shared::domain::{accumulate, Accumulator};

/// Column order of every student tuple
pub const STUDENT_COLUMNS: [&str; 3] = ["last_name", "first_name", "enrollment_date"];

const TUPLE_SEPARATOR: char = ',';

/// Composed `VALUES` list. Only the builder creates one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkInsertPayload {
    values: String,
    tuple_count: usize,
}

impl BulkInsertPayload {
    pub fn as_str(&self) -> &str {
        &self.values
    }

    pub fn tuple_count(&self) -> usize {
        self.tuple_count
    }

    pub fn is_empty(&self) -> bool {
        self.tuple_count == 0
    }
}

/// `value` as a SQL string literal
pub fn quote_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('\'');
    for c in value.chars() {
        if c == '\'' {
            literal.push('\'');
        }
        literal.push(c);
    }
    literal.push('\'');
    literal
}

fn render_tuple(fields: &[&str]) -> String {
    let quoted: Vec<String> = fields.iter().map(|f| quote_literal(f)).collect();
    format!("({})", quoted.join(","))
}

fn student_tuple(record: &StudentRecord) -> String {
    let date = record.enrollment_date.format("%Y-%m-%d").to_string();
    render_tuple(&[
        record.last_name.as_str(),
        record.first_name.as_str(),
        date.as_str(),
    ])
}

/// Appends rendered tuples; drops the one trailing separator when finished
#[derive(Debug, Default)]
pub struct PayloadBuffer {
    values: String,
    tuple_count: usize,
}

impl Accumulator for PayloadBuffer {
    type Contribution = String;
    type Output = BulkInsertPayload;

    fn combine(&mut self, tuple: String) {
        self.values.push_str(&tuple);
        self.values.push(TUPLE_SEPARATOR);
        self.tuple_count += 1;
    }

    fn finish(mut self) -> BulkInsertPayload {
        if self.values.ends_with(TUPLE_SEPARATOR) {
            self.values.pop();
        }

        BulkInsertPayload {
            values: self.values,
            tuple_count: self.tuple_count,
        }
    }
}

pub fn build_student_payload(records: &[StudentRecord]) -> BulkInsertPayload {
    accumulate::<PayloadBuffer, _, _>(records, student_tuple)
}
