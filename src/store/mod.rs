//! Storage backends.
//!
//! Two providers exist: a process-local guarded map for tests and demos,
//! and a single-file sqlite database for durable state. Mappers in
//! [`crate::repo`] are the only components aware of either representation.

mod memory;
pub use memory::*;

mod sqlite;
pub use sqlite::*;
