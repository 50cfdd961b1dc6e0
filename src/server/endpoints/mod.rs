//! Request handlers, one per route.
//!
//! Each handler follows the same shape: parse, validate against the fixed
//! schema, construct the domain object, invoke the matching use case, map
//! the result onto a status code and JSON body.

mod label;
pub use label::*;

mod todo;
pub use todo::*;
