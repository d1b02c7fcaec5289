//! Join strategies and dispatch.
//!
//! Two interchangeable algorithms implement [`JoinAlgorithm`]:
//! - [`NestedLoopJoin`]: any comparator, O(|R| x |S| x |C|).
//! - [`HashJoin`]: equality-only, O(|R| + |S|), one build row per key.

pub mod hash;
pub mod nested_loop;

pub use hash::{hash_join, hash_join_flat, HashJoin};
pub use nested_loop::{natural_join, nested_loop_join, nested_loop_join_flat, NestedLoopJoin};

use rels_core::config::{EngineConfig, JoinStrategy};
use rels_core::Relation;

use crate::condition::Condition;
use crate::traits::JoinAlgorithm;

/// Algorithm for `strategy` with default settings.
pub fn algorithm(strategy: JoinStrategy) -> Box<dyn JoinAlgorithm> {
    match strategy {
        JoinStrategy::NestedLoop => Box::new(NestedLoopJoin),
        JoinStrategy::Hash => Box::new(HashJoin::default()),
    }
}

/// Algorithm selected and tuned by `cfg`.
pub fn algorithm_for(cfg: &EngineConfig) -> Box<dyn JoinAlgorithm> {
    match cfg.join_strategy {
        JoinStrategy::NestedLoop => Box::new(NestedLoopJoin),
        JoinStrategy::Hash => Box::new(HashJoin::from_config(cfg)),
    }
}

pub fn join(
    strategy: JoinStrategy,
    left: &Relation,
    right: &Relation,
    conditions: &[Condition],
) -> Relation {
    match strategy {
        JoinStrategy::NestedLoop => nested_loop_join(left, right, conditions),
        JoinStrategy::Hash => hash_join(left, right, conditions),
    }
}

pub fn join_with_config(
    cfg: &EngineConfig,
    left: &Relation,
    right: &Relation,
    conditions: &[Condition],
) -> Relation {
    algorithm_for(cfg).join(left, right, conditions)
}
