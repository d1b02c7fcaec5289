#![forbid(unsafe_code)]
//! rels-ingest: turn host records into tuples.
//!
//! Host types opt in by implementing [`Record`] (named, readable fields);
//! there is no runtime reflection. JSON objects, JSON-lines streams and CSV
//! files are supported out of the box. Failures surface as
//! [`IngestionError`], which is kept apart from the engine's own error type.

pub mod csv;
pub mod error;
pub mod json;
pub mod record;

pub use error::{IngestionError, Result};
pub use record::{to_relation, to_tuple, Record};
