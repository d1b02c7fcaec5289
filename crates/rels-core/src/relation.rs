//! Immutable ordered sequence of tuples.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::hash::{hash_relation, Hash256};
use crate::tuple::Tuple;

/// A relation is a shared, read-only `Vec<Tuple>`.
///
/// Order is whatever the producing operator emitted. Duplicates are allowed;
/// `distinct` in `rels-operators` removes them when set semantics are wanted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Relation {
    tuples: Arc<Vec<Tuple>>,
}

impl Relation {
    pub fn new(tuples: Vec<Tuple>) -> Self {
        Self {
            tuples: Arc::new(tuples),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Tuple> {
        self.tuples.get(idx)
    }

    pub fn first(&self) -> Option<&Tuple> {
        self.tuples.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tuple> {
        self.tuples.iter()
    }

    pub fn tuples(&self) -> &[Tuple] {
        &self.tuples
    }

    /// Attribute names of the first tuple. Relations are not schema-checked,
    /// so this is a representative heading, not a guarantee for every row.
    pub fn heading(&self) -> BTreeSet<String> {
        self.first()
            .map(|t| t.attributes().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Stable content digest; equal relations (same tuples, same order) hash equal.
    pub fn digest(&self) -> Hash256 {
        hash_relation(self)
    }

    pub fn to_vec(&self) -> Vec<Tuple> {
        self.tuples.as_ref().clone()
    }
}

impl From<Vec<Tuple>> for Relation {
    fn from(tuples: Vec<Tuple>) -> Self {
        Self::new(tuples)
    }
}

impl FromIterator<Tuple> for Relation {
    fn from_iter<I: IntoIterator<Item = Tuple>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Relation {
    type Item = &'a Tuple;
    type IntoIter = std::slice::Iter<'a, Tuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.tuples.iter()
    }
}

impl Index<usize> for Relation {
    type Output = Tuple;

    fn index(&self, idx: usize) -> &Tuple {
        &self.tuples[idx]
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, t) in self.tuples.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", t)?;
        }
        write!(f, "]")
    }
}
