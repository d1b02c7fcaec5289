//! The capability host records implement to become tuples.

use std::collections::BTreeMap;

use rels_core::{Relation, Scalar, Tuple};

use crate::error::Result;

/// A host value exposing named, readable fields.
///
/// `read_field` is only called with names returned by `field_names`; a field
/// that cannot be produced should fail with
/// [`IngestionError::UnreadableField`](crate::IngestionError::UnreadableField).
pub trait Record {
    fn field_names(&self) -> Vec<String>;

    fn read_field(&self, name: &str) -> Result<Scalar>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field_names(&self) -> Vec<String> {
        (**self).field_names()
    }

    fn read_field(&self, name: &str) -> Result<Scalar> {
        (**self).read_field(name)
    }
}

impl Record for Tuple {
    fn field_names(&self) -> Vec<String> {
        self.attributes().map(str::to_string).collect()
    }

    fn read_field(&self, name: &str) -> Result<Scalar> {
        Ok(self.value(name).clone())
    }
}

impl Record for BTreeMap<String, Scalar> {
    fn field_names(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }

    fn read_field(&self, name: &str) -> Result<Scalar> {
        Ok(self.get(name).cloned().unwrap_or(Scalar::Null))
    }
}

/// Tuple holding every readable field of `record`.
pub fn to_tuple<R: Record + ?Sized>(record: &R) -> Result<Tuple> {
    let mut fields = BTreeMap::new();
    for name in record.field_names() {
        let value = record.read_field(&name)?;
        fields.insert(name, value);
    }
    Ok(Tuple::from_map(fields))
}

/// Relation of `to_tuple` over `records`, in iteration order. The first
/// failing record aborts the conversion.
pub fn to_relation<I>(records: I) -> Result<Relation>
where
    I: IntoIterator,
    I::Item: Record,
{
    let tuples = records
        .into_iter()
        .map(|r| to_tuple(&r))
        .collect::<Result<Vec<_>>>()?;

    #[cfg(feature = "tracing")]
    tracing::trace!(rows = tuples.len(), "ingested records");

    Ok(Relation::new(tuples))
}
