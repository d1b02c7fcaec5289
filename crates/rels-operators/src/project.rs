//! Projection onto a list of attributes.

use rels_core::{Relation, Scalar, Tuple};

/// Restrict every tuple to `keys`.
///
/// The output tuples define exactly the requested attributes; an attribute a
/// tuple lacks comes out as `Null` rather than failing.
pub fn project<K: AsRef<str>>(input: &Relation, keys: &[K]) -> Relation {
    let out: Relation = input.iter().map(|t| project_tuple(t, keys)).collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(op = "project", rows = out.len(), keys = keys.len(), "project finished");

    out
}

pub(crate) fn project_tuple<K: AsRef<str>>(tuple: &Tuple, keys: &[K]) -> Tuple {
    keys.iter()
        .map(|k| {
            let k = k.as_ref();
            (k, tuple.get(k).cloned().unwrap_or(Scalar::Null))
        })
        .collect()
}
