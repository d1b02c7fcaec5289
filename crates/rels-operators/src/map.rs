//! Tuple-wise rewrites: map, extend (derived attributes), rename.

use std::collections::{BTreeMap, HashMap};

use rels_core::error::{Error, Result};
use rels_core::{Relation, Tuple};

use crate::merge::merge;

/// Replace every tuple by `f(tuple)`.
pub fn map<F>(input: &Relation, f: F) -> Relation
where
    F: Fn(&Tuple) -> Tuple,
{
    input.iter().map(f).collect()
}

/// Add derived attributes: each tuple becomes `merge(tuple, f(tuple))`, so a
/// derived attribute with an existing name replaces the original value.
pub fn extend<F>(input: &Relation, f: F) -> Relation
where
    F: Fn(&Tuple) -> Tuple,
{
    input.iter().map(|t| merge(t, &f(t))).collect()
}

/// Rename attributes `from[i]` to `to[i]`.
///
/// Attributes not listed are kept. A renamed attribute overwrites an
/// unrenamed attribute that already carries the target name. Each source may
/// appear once.
pub fn rename<A, B>(input: &Relation, from: &[A], to: &[B]) -> Result<Relation>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    if from.len() != to.len() {
        return Err(Error::InvalidArgument(format!(
            "rename needs one target per source attribute ({} sources, {} targets)",
            from.len(),
            to.len()
        )));
    }

    let mut renames: HashMap<&str, &str> = HashMap::with_capacity(from.len());
    for (a, b) in from.iter().zip(to) {
        if renames.insert(a.as_ref(), b.as_ref()).is_some() {
            return Err(Error::InvalidArgument(format!(
                "rename lists source attribute {:?} more than once",
                a.as_ref()
            )));
        }
    }

    // If no renames, pass through
    if renames.is_empty() {
        return Ok(input.clone());
    }

    let out = input
        .iter()
        .map(|t| {
            let mut fields = BTreeMap::new();
            for (name, value) in t.iter().filter(|(n, _)| !renames.contains_key(n)) {
                fields.insert(name.to_string(), value.clone());
            }
            for (name, value) in t.iter() {
                if let Some(new_name) = renames.get(name) {
                    fields.insert(new_name.to_string(), value.clone());
                }
            }
            Tuple::from_map(fields)
        })
        .collect();
    Ok(out)
}
