//! Hash join (equality only).
//!
//! Precondition: every comparator denotes plain equality. This is assumed,
//! not checked; a non-equality comparator silently yields wrong results.
//!
//! Build side is the left relation, probe side the right. The index keeps one
//! left tuple per composite key: when several left tuples share a key the
//! last one indexed wins, so a duplicated key joins at most once per probe
//! row. This differs from the nested-loop join, which emits every match.

use std::collections::HashMap;

use rels_core::config::EngineConfig;
use rels_core::error::Result;
use rels_core::{Relation, Scalar, Tuple};

use crate::condition::{Condition, JoinArg};
use crate::join::nested_loop::NestedLoopJoin;
use crate::merge::merge;
use crate::traits::JoinAlgorithm;

#[derive(Debug, Clone, Copy, Default)]
pub struct HashJoin {
    /// Report shadowed build rows at `warn` rather than `debug`.
    pub warn_on_duplicate_keys: bool,
}

impl HashJoin {
    pub fn from_config(cfg: &EngineConfig) -> Self {
        Self {
            warn_on_duplicate_keys: cfg.warn_on_duplicate_build_keys,
        }
    }
}

/// Ordered values of `tuple` at `attributes`; absent attributes key as `Null`.
fn composite_key<'t>(tuple: &'t Tuple, attributes: &[&str]) -> Vec<&'t Scalar> {
    attributes.iter().map(|a| tuple.value(a)).collect()
}

impl JoinAlgorithm for HashJoin {
    fn name(&self) -> &'static str {
        "join_hash"
    }

    fn join(&self, left: &Relation, right: &Relation, conditions: &[Condition]) -> Relation {
        if conditions.is_empty() {
            // No key to build on: cartesian product.
            #[cfg(feature = "tracing")]
            tracing::trace!(op = self.name(), "no conditions, delegating to nested loop");
            return NestedLoopJoin.join(left, right, conditions);
        }

        let left_cols: Vec<&str> = conditions.iter().map(Condition::left).collect();
        let right_cols: Vec<&str> = conditions.iter().map(Condition::right).collect();

        let mut index: HashMap<Vec<&Scalar>, &Tuple> = HashMap::with_capacity(left.len());
        let mut shadowed = 0usize;
        for r in left {
            if index.insert(composite_key(r, &left_cols), r).is_some() {
                shadowed += 1;
            }
        }

        if shadowed > 0 {
            self.report_shadowed(shadowed);
        }

        let mut out = Vec::new();
        for s in right {
            if let Some(r) = index.get(&composite_key(s, &right_cols)) {
                out.push(merge(r, s));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            op = self.name(),
            build_rows = left.len(),
            distinct_keys = index.len(),
            probe_rows = right.len(),
            output_rows = out.len(),
            "join finished"
        );

        Relation::new(out)
    }
}

impl HashJoin {
    #[cfg(feature = "tracing")]
    fn report_shadowed(&self, shadowed: usize) {
        if self.warn_on_duplicate_keys {
            tracing::warn!(
                op = self.name(),
                shadowed,
                "duplicate build keys; only the last row per key is joined"
            );
        } else {
            tracing::debug!(op = self.name(), shadowed, "duplicate build keys");
        }
    }

    #[cfg(not(feature = "tracing"))]
    fn report_shadowed(&self, _shadowed: usize) {}
}

pub fn hash_join(left: &Relation, right: &Relation, conditions: &[Condition]) -> Relation {
    HashJoin::default().join(left, right, conditions)
}

pub fn hash_join_flat(left: &Relation, right: &Relation, args: &[JoinArg]) -> Result<Relation> {
    HashJoin::default().join_flat(left, right, args)
}
