//! Select and delete: keep or drop tuples by a caller predicate.
//!
//! Both take the same predicate contract and differ only in which truth
//! value is retained. Input order is preserved.

use rels_core::{Relation, Tuple};

/// Tuples for which `predicate` is true.
pub fn select<P>(input: &Relation, predicate: P) -> Relation
where
    P: Fn(&Tuple) -> bool,
{
    retain(input, predicate, true)
}

/// Tuples for which `predicate` is false.
pub fn delete<P>(input: &Relation, predicate: P) -> Relation
where
    P: Fn(&Tuple) -> bool,
{
    retain(input, predicate, false)
}

/// Fallible `select`: the first predicate error aborts and is returned as is.
pub fn try_select<P, E>(input: &Relation, predicate: P) -> Result<Relation, E>
where
    P: Fn(&Tuple) -> Result<bool, E>,
{
    try_retain(input, predicate, true)
}

/// Fallible `delete`: the first predicate error aborts and is returned as is.
pub fn try_delete<P, E>(input: &Relation, predicate: P) -> Result<Relation, E>
where
    P: Fn(&Tuple) -> Result<bool, E>,
{
    try_retain(input, predicate, false)
}

fn retain<P>(input: &Relation, predicate: P, keep_when: bool) -> Relation
where
    P: Fn(&Tuple) -> bool,
{
    let out: Relation = input
        .iter()
        .filter(|t| predicate(*t) == keep_when)
        .cloned()
        .collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        op = if keep_when { "select" } else { "delete" },
        input_rows = input.len(),
        output_rows = out.len(),
        "filter finished"
    );

    out
}

fn try_retain<P, E>(input: &Relation, predicate: P, keep_when: bool) -> Result<Relation, E>
where
    P: Fn(&Tuple) -> Result<bool, E>,
{
    let mut out = Vec::new();
    for t in input {
        if predicate(t)? == keep_when {
            out.push(t.clone());
        }
    }
    Ok(Relation::new(out))
}
