/// Shared infrastructure concerns
///
/// This module contains infrastructure implementations that are shared across
/// multiple bounded contexts (modules).
pub mod database;
pub mod database_state;

// Re-exports for convenience
pub use database::{Database, DbConnection, DbPool};
pub use database_state::{with_connection, DatabaseHealthMonitor, DatabaseState, SharedDatabaseState};
