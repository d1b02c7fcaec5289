//! The seam shared by the join strategies.

use rels_core::error::Result;
use rels_core::Relation;

use crate::condition::{parse_join_conditions, Condition, JoinArg};

/// A join algorithm: given two relations and a condition list, produce the
/// relation of merged matches.
///
/// Invariants:
/// - Inputs are never modified; the result is a fresh relation.
/// - An empty condition list means cartesian product.
/// - Output order is the order the algorithm naturally produces.
pub trait JoinAlgorithm: Send + Sync {
    /// Human-readable algorithm name (stable).
    fn name(&self) -> &'static str;

    fn join(&self, left: &Relation, right: &Relation, conditions: &[Condition]) -> Relation;

    /// Join with a flattened `(left, right, comparator)*` argument list.
    /// A malformed list fails before either relation is read.
    fn join_flat(&self, left: &Relation, right: &Relation, args: &[JoinArg]) -> Result<Relation> {
        let conditions = parse_join_conditions(args)?;
        Ok(self.join(left, right, &conditions))
    }
}
