#![forbid(unsafe_code)]
//! rels-operators: join engine (nested-loop, hash) and transform operators
//! (project/select/delete/update and friends).
//!
//! Design intent:
//! - Every operator is a pure, synchronous function of its inputs. Inputs are
//!   borrowed immutably; outputs are freshly allocated relations.
//! - Caller callbacks are plain closures. The `try_*` variants let a callback
//!   fail; its error is returned unchanged and the partial output is dropped.
//! - Flattened argument lists are validated before any row is read.

pub mod condition;
pub mod merge;
pub mod traits;

pub mod join;

pub mod aggregate;
pub mod distinct;
pub mod filter;
pub mod map;
pub mod predicate;
pub mod project;
pub mod update;

pub mod ext;

pub use condition::{parse_join_conditions, Comparator, Condition, JoinArg, EQ};
pub use ext::RelationExt;
pub use join::{hash_join, join, join_with_config, nested_loop_join, HashJoin, NestedLoopJoin};
pub use merge::merge;
pub use traits::JoinAlgorithm;
