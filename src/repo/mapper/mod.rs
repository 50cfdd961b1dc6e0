//! Storage mappers.
//!
//! A mapper translates between the domain representation and one backend's
//! native representation. Identifier assignment happens here: callers never
//! supply ids, the mapper (or the database underneath it) draws them.

use std::future::Future;

use crate::types::{EntryChanges, TodoEntry, TodoLabel};

mod memory;
pub use memory::*;

mod sqlite;
pub use sqlite::*;

/// Raw backend failures, the bottom of the error chain.
#[derive(thiserror::Error, Debug)]
pub enum MapperError {
    #[error("entity `id:{0}` was not found")]
    EntityNotFound(i64),
    #[error("create failed :: {0}")]
    CreateFailed(String),
    #[error("update failed :: {0}")]
    UpdateFailed(String),
}

/// Persistence operations for [`TodoEntry`].
pub trait TodoEntryMapper: Clone + Send + Sync + 'static {
    /// Returns the entry stored under `identifier`.
    fn get(
        &self,
        identifier: i64,
    ) -> impl Future<Output = Result<TodoEntry, MapperError>> + Send;

    /// Persists a new entry and returns it with a backend-assigned id.
    fn create(
        &self,
        entity: TodoEntry,
    ) -> impl Future<Output = Result<TodoEntry, MapperError>> + Send;

    /// Attaches the label referenced by `changes` to the entry stored under
    /// `identifier`. The referenced label must exist before the entry is
    /// touched; on any failure the entry is left unmodified.
    fn update(
        &self,
        identifier: i64,
        changes: EntryChanges,
    ) -> impl Future<Output = Result<TodoEntry, MapperError>> + Send;
}

/// Persistence operations for [`TodoLabel`].
pub trait TodoLabelMapper: Clone + Send + Sync + 'static {
    /// Persists a new label and returns it with a backend-assigned id.
    fn create(
        &self,
        value_object: TodoLabel,
    ) -> impl Future<Output = Result<TodoLabel, MapperError>> + Send;
}
