// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application;      // Shared application layer patterns
pub mod config;          // Settings resolution
pub mod domain;          // Shared domain concepts (accumulator)
pub mod errors;          // Shared error types
pub mod infrastructure;  // Shared infrastructure (database pool and state)
pub mod utils;           // Shared utilities

// Re-exports for convenience
pub use infrastructure::database::Database;
pub use infrastructure::database_state::{DatabaseHealthMonitor, DatabaseState, SharedDatabaseState};
