#![forbid(unsafe_code)]
//! rels-core: values, tuples, relations, and the shared error/config types.
//!
//! Everything in here is an immutable value. Operators in `rels-operators`
//! consume these and always produce fresh outputs; no type in this crate
//! exposes a `&mut self` mutation path.

pub mod config;
pub mod error;
pub mod hash;
pub mod relation;
pub mod tuple;
pub mod types;

pub mod prelude;

pub use error::{Error, Result};
pub use relation::Relation;
pub use tuple::Tuple;
pub use types::Scalar;
