//! Convenient re-exports for downstream crates.

pub use crate::config::{EngineConfig, JoinStrategy};
pub use crate::error::{Error, Result};
pub use crate::hash::Hash256;
pub use crate::relation::Relation;
pub use crate::tuple::Tuple;
pub use crate::types::Scalar;
