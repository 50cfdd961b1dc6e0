//! Wire-level marshalling: request payloads, the fixed JSON Schema
//! documents, and the validation pass handlers run before constructing
//! domain objects.

mod payload;
pub use payload::*;

mod schema;
pub use schema::*;

mod validate;
pub use validate::*;
