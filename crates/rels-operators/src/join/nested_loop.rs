//! Nested-loop join.

use rels_core::error::Result;
use rels_core::Relation;

use crate::condition::{all_match, natural_conditions, Condition, JoinArg};
use crate::merge::merge;
use crate::traits::JoinAlgorithm;

/// Row-major nested loop: every left tuple (outer) against every right tuple
/// (inner). Correct for arbitrary comparators, including range and custom
/// predicates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NestedLoopJoin;

impl JoinAlgorithm for NestedLoopJoin {
    fn name(&self) -> &'static str {
        "join_nested_loop"
    }

    fn join(&self, left: &Relation, right: &Relation, conditions: &[Condition]) -> Relation {
        let mut out = Vec::new();
        for r in left {
            for s in right {
                if all_match(conditions, r, s) {
                    out.push(merge(r, s));
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            op = self.name(),
            left_rows = left.len(),
            right_rows = right.len(),
            conditions = conditions.len(),
            output_rows = out.len(),
            "join finished"
        );

        Relation::new(out)
    }
}

pub fn nested_loop_join(left: &Relation, right: &Relation, conditions: &[Condition]) -> Relation {
    NestedLoopJoin.join(left, right, conditions)
}

pub fn nested_loop_join_flat(left: &Relation, right: &Relation, args: &[JoinArg]) -> Result<Relation> {
    NestedLoopJoin.join_flat(left, right, args)
}

/// Equality join on the attributes both relations share.
///
/// Shared attributes are read from each relation's first tuple. With nothing
/// shared this degrades to the cartesian product.
pub fn natural_join(left: &Relation, right: &Relation) -> Relation {
    let conditions = natural_conditions(left, right);
    nested_loop_join(left, right, &conditions)
}
