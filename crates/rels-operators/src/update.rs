//! In-place-shaped update that returns a new relation.

use rels_core::{Relation, Tuple};

/// Replace every tuple matching `predicate` by `transform(tuple)`.
///
/// Length and order are preserved exactly; non-matching tuples are carried
/// over unchanged (shared, not copied).
pub fn update<F, P>(input: &Relation, transform: F, predicate: P) -> Relation
where
    F: Fn(&Tuple) -> Tuple,
    P: Fn(&Tuple) -> bool,
{
    let mut updated = 0usize;
    let out: Relation = input
        .iter()
        .map(|t| {
            if predicate(t) {
                updated += 1;
                transform(t)
            } else {
                t.clone()
            }
        })
        .collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(op = "update", rows = out.len(), updated, "update finished");
    #[cfg(not(feature = "tracing"))]
    let _ = updated;

    out
}

/// Fallible `update`. Either callback may fail; the first error aborts the
/// call and is returned unchanged.
pub fn try_update<F, P, E>(input: &Relation, transform: F, predicate: P) -> Result<Relation, E>
where
    F: Fn(&Tuple) -> Result<Tuple, E>,
    P: Fn(&Tuple) -> Result<bool, E>,
{
    let mut out = Vec::with_capacity(input.len());
    for t in input {
        if predicate(t)? {
            out.push(transform(t)?);
        } else {
            out.push(t.clone());
        }
    }
    Ok(Relation::new(out))
}
