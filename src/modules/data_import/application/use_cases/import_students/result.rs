/// What the import did with the rows it read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The source had no rows, so no statement was issued
    NothingToInsert,
    /// Dry run: the tuples that would have been inserted
    Preview { tuples: Vec<Vec<String>> },
    Inserted { rows_affected: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStudentsResult {
    pub table: String,
    pub records_read: usize,
    pub outcome: ImportOutcome,
}

impl ImportStudentsResult {
    pub fn new(table: String, records_read: usize, outcome: ImportOutcome) -> Self {
        Self {
            table,
            records_read,
            outcome,
        }
    }

    pub fn rows_affected(&self) -> usize {
        match self.outcome {
            ImportOutcome::Inserted { rows_affected } => rows_affected,
            ImportOutcome::NothingToInsert | ImportOutcome::Preview { .. } => 0,
        }
    }
}
