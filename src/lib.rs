#![forbid(unsafe_code)]
//! rels: an embedded relational-algebra engine over immutable in-memory
//! relations.
//!
//! - [`rels_core`]: `Scalar`, `Tuple`, `Relation`, errors and configuration.
//! - [`rels_operators`]: nested-loop and hash joins, project/select/delete/update
//!   and related transforms.
//! - [`rels_ingest`]: host records, JSON and CSV into relations.
//!
//! All operators are synchronous pure functions; a relation returned by one
//! call can be fed to another, or shared across threads, without copying.

pub use rels_core;
pub use rels_ingest;
pub use rels_operators;

pub mod prelude {
    pub use rels_core::prelude::*;
    pub use rels_ingest::{to_relation, to_tuple, IngestionError, Record};
    pub use rels_operators::predicate::{and, not, or, value_eq};
    pub use rels_operators::{
        hash_join, merge, nested_loop_join, Comparator, Condition, JoinAlgorithm, JoinArg,
        RelationExt, EQ,
    };
}
