//! # Persistence layers
//!
//! This module holds the two persistence layers of the service and their
//! error taxonomies:
//!
//! * **Mappers** are the only components aware of the storage
//!   representation. One implementation exists per entity and per backend
//!   (guarded map or sqlite), and each failure surfaces as a
//!   [`MapperError`].
//! * **Repositories** wrap exactly one mapper behind a backend-agnostic
//!   facade, re-wrapping every mapper failure 1:1 into a
//!   [`RepositoryError`]. They carry no business logic.
//!
//! Layers above interact with repositories only; raw storage handles never
//! cross this boundary.

pub mod mapper;
pub use mapper::{
    MapperError, MemoryTodoEntryMapper, MemoryTodoLabelMapper, SqliteTodoEntryMapper,
    SqliteTodoLabelMapper, TodoEntryMapper, TodoLabelMapper,
};

mod repository;
pub use repository::*;
