//! Domain objects exchanged between the service layers.
//!
//! Instances are transient copies: every layer receives its own value and
//! the storage backend stays the source of truth.

mod entry;
pub use entry::*;

mod label;
pub use label::*;
