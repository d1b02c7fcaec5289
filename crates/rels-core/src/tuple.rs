//! Immutable attribute-name -> value mapping.
//!
//! A `Tuple` shares its map behind an `Arc`, so cloning is cheap and handing
//! a tuple to several relations never aliases mutable state. Methods that look
//! like edits (`with`, `without`) return a new tuple.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hash::{hash_tuple, Hash256};
use crate::types::{Scalar, NULL};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tuple {
    fields: Arc<BTreeMap<String, Scalar>>,
}

impl Tuple {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_map(fields: BTreeMap<String, Scalar>) -> Self {
        Self {
            fields: Arc::new(fields),
        }
    }

    /// Build a tuple from a flattened `k1, v1, k2, v2, ...` list.
    ///
    /// Keys must be `Scalar::Str`. The whole list is validated before the
    /// tuple is assembled; a later duplicate key overrides an earlier one.
    pub fn build(kv: &[Scalar]) -> Result<Self> {
        if kv.len() % 2 != 0 {
            return Err(Error::InvalidArgument(format!(
                "can't build a tuple from an odd number of arguments ({})",
                kv.len()
            )));
        }
        for (pos, key) in kv.iter().step_by(2).enumerate() {
            if key.as_str().is_none() {
                return Err(Error::InvalidArgument(format!(
                    "key at position {} must be a string, got {}",
                    pos * 2,
                    key.kind()
                )));
            }
        }

        let mut fields = BTreeMap::new();
        for pair in kv.chunks_exact(2) {
            if let Some(name) = pair[0].as_str() {
                fields.insert(name.to_string(), pair[1].clone());
            }
        }
        Ok(Self::from_map(fields))
    }

    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.fields.get(name)
    }

    /// Value of `name`, or `Null` if the attribute is absent.
    pub fn value(&self, name: &str) -> &Scalar {
        self.fields.get(name).unwrap_or(&NULL)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// New tuple with `name` set to `value`.
    pub fn with(&self, name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        let mut fields = BTreeMap::clone(&self.fields);
        fields.insert(name.into(), value.into());
        Self::from_map(fields)
    }

    /// New tuple without `name`. Returns a cheap clone if it was absent.
    pub fn without(&self, name: &str) -> Self {
        if !self.contains(name) {
            return self.clone();
        }
        let mut fields = BTreeMap::clone(&self.fields);
        fields.remove(name);
        Self::from_map(fields)
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &BTreeMap<String, Scalar> {
        &self.fields
    }

    pub fn into_map(self) -> BTreeMap<String, Scalar> {
        Arc::try_unwrap(self.fields).unwrap_or_else(|shared| BTreeMap::clone(&shared))
    }

    /// Stable content digest over attribute names and typed values.
    pub fn digest(&self) -> Hash256 {
        hash_tuple(self)
    }

    pub(crate) fn hash_into(&self, hasher: &mut blake3::Hasher) {
        hasher.update(&(self.fields.len() as u64).to_le_bytes());
        for (name, value) in self.fields.iter() {
            hasher.update(&(name.len() as u64).to_le_bytes());
            hasher.update(name.as_bytes());
            value.hash_into(hasher);
        }
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for Tuple {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, Scalar>> for Tuple {
    fn from(fields: BTreeMap<String, Scalar>) -> Self {
        Self::from_map(fields)
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        write!(f, "}}")
    }
}
