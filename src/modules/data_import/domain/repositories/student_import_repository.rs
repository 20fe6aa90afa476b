use async_trait::async_trait;

use crate::modules::data_import::domain::services::BulkInsertPayload;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait StudentImportRepository: Send + Sync {
    /// Issue one multi-row insert of `payload` into `table` and return the
    /// number of rows affected. An empty payload is refused, never sent.
    async fn insert_payload(&self, table: &str, payload: &BulkInsertPayload) -> AppResult<usize>;
}
