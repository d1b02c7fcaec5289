//! Duplicate elimination and multi-way projection.

use std::collections::HashSet;

use rels_core::{Relation, Tuple};

use crate::project::project_tuple;

/// Drop duplicate tuples, keeping the first occurrence of each in order.
pub fn distinct(input: &Relation) -> Relation {
    let mut seen: HashSet<&Tuple> = HashSet::with_capacity(input.len());
    let out: Relation = input.iter().filter(|t| seen.insert(*t)).cloned().collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        op = "distinct",
        input_rows = input.len(),
        output_rows = out.len(),
        "distinct finished"
    );

    out
}

/// Several projections of one relation computed in a single pass.
/// Result `i` is `project(input, projections[i])`.
pub fn project_multiple(input: &Relation, projections: &[&[&str]]) -> Vec<Relation> {
    let mut outs: Vec<Vec<Tuple>> = projections
        .iter()
        .map(|_| Vec::with_capacity(input.len()))
        .collect();

    for t in input {
        for (keys, out) in projections.iter().zip(outs.iter_mut()) {
            out.push(project_tuple(t, *keys));
        }
    }

    outs.into_iter().map(Relation::new).collect()
}

/// Split a denormalised parent/child relation back into one relation per
/// entity: `project_multiple` followed by `distinct` on every part.
pub fn unjoin(input: &Relation, projections: &[&[&str]]) -> Vec<Relation> {
    project_multiple(input, projections)
        .iter()
        .map(distinct)
        .collect()
}
