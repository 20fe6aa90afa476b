use std::path::PathBuf;

pub const DEFAULT_TABLE: &str = "students";

/// Where the student rows come from
#[derive(Debug, Clone)]
pub enum RecordSource {
    File(PathBuf),
    /// CSV text already in memory, headers included
    Text(String),
}

/// Command for loading a CSV of students with one bulk insert
#[derive(Debug, Clone)]
pub struct ImportStudentsCommand {
    pub source: RecordSource,
    pub table: String,
    /// Build and check the payload but do not send it
    pub dry_run: bool,
}

impl ImportStudentsCommand {
    pub fn new(source: RecordSource) -> Self {
        Self {
            source,
            table: DEFAULT_TABLE.to_string(),
            dry_run: false,
        }
    }

    pub fn into_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
