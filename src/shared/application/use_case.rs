//! Handler traits shared by every module.
//!
//! Writes go through `UseCase` and reads through `Query`, so the HTTP routes
//! and the upload binary drive handlers the same way and tests can swap the
//! repositories underneath.
use async_trait::async_trait;

use crate::shared::errors::AppResult;

/// A handler that changes state, e.g. `ImportStudentsHandler`
#[async_trait]
pub trait UseCase<TCommand, TResult> {
    async fn execute(&self, command: TCommand) -> AppResult<TResult>;
}

/// A read-only handler, e.g. `GetStudentSummaryHandler`
#[async_trait]
pub trait Query<TQuery, TResult> {
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
