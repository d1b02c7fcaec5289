//! JSON objects as records, NDJSON reading and writing.

use std::io::{BufRead, BufWriter, Write};

use rels_core::{Relation, Scalar, Tuple};
use serde_json::{Map, Value};

use crate::error::{IngestionError, Result};
use crate::record::{to_tuple, Record};

/// Convert one JSON value. Integral numbers that fit become `I64`, other
/// numbers `F64`; arrays and objects are not tuple values.
pub fn json_to_scalar(field: &str, v: &Value) -> Result<Scalar> {
    match v {
        Value::Null => Ok(Scalar::Null),
        Value::Bool(b) => Ok(Scalar::Bool(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Scalar::I64(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Scalar::F64(f))
            } else {
                Err(IngestionError::UnsupportedValue {
                    field: field.to_string(),
                    kind: "number out of range",
                })
            }
        }
        Value::String(s) => Ok(Scalar::Str(s.clone())),
        Value::Array(_) => Err(IngestionError::UnsupportedValue {
            field: field.to_string(),
            kind: "array",
        }),
        Value::Object(_) => Err(IngestionError::UnsupportedValue {
            field: field.to_string(),
            kind: "object",
        }),
    }
}

/// Convert one scalar for output. `I32` and `F32` widen to JSON numbers and
/// read back as `I64`/`F64`. Binary values and non-finite floats have no JSON
/// form that [`json_to_scalar`] accepts, so they are rejected.
pub fn scalar_to_json(field: &str, v: &Scalar) -> Result<Value> {
    use Scalar::*;
    let unsupported = |kind| IngestionError::UnsupportedValue {
        field: field.to_string(),
        kind,
    };
    Ok(match v {
        Null => Value::Null,
        Bool(b) => Value::Bool(*b),
        I32(i) => Value::from(*i),
        I64(i) => Value::from(*i),
        F32(f) if f.is_finite() => Value::from(*f as f64),
        F64(f) if f.is_finite() => Value::from(*f),
        F32(_) | F64(_) => return Err(unsupported("non-finite float")),
        Str(s) => Value::String(s.clone()),
        Bin(_) => return Err(unsupported("binary")),
    })
}

impl Record for Map<String, Value> {
    fn field_names(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }

    fn read_field(&self, name: &str) -> Result<Scalar> {
        match self.get(name) {
            Some(v) => json_to_scalar(name, v),
            None => Ok(Scalar::Null),
        }
    }
}

impl Record for Value {
    fn field_names(&self) -> Vec<String> {
        match self {
            Value::Object(map) => map.field_names(),
            _ => Vec::new(),
        }
    }

    fn read_field(&self, name: &str) -> Result<Scalar> {
        match self {
            Value::Object(map) => map.read_field(name),
            other => Err(IngestionError::NotARecord(format!(
                "expected a JSON object, found {}",
                json_kind(other)
            ))),
        }
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A JSON value that must be an object.
pub fn object_to_tuple(v: &Value) -> Result<Tuple> {
    match v {
        Value::Object(map) => to_tuple(map),
        other => Err(IngestionError::NotARecord(format!(
            "expected a JSON object, found {}",
            json_kind(other)
        ))),
    }
}

/// Parse a JSON array of objects into a relation.
pub fn from_json_str(s: &str) -> Result<Relation> {
    let value: Value = serde_json::from_str(s)?;
    match value {
        Value::Array(items) => items.iter().map(object_to_tuple).collect(),
        other => Err(IngestionError::NotARecord(format!(
            "expected a JSON array of objects, found {}",
            json_kind(&other)
        ))),
    }
}

/// Read one JSON object per line. Blank lines are skipped.
pub fn read_jsonl<R: BufRead>(reader: R) -> Result<Relation> {
    let mut tuples = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(&line)?;
        tuples.push(object_to_tuple(&value)?);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(rows = tuples.len(), "read jsonl");

    Ok(Relation::new(tuples))
}

/// Streaming NDJSON writer.
///
/// Output is readable by [`read_jsonl`]. Integer and float widths are not
/// preserved: `I32` comes back as `I64` and `F32` as `F64`.
pub struct JsonlWriter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> JsonlWriter<W> {
    pub fn to_writer(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Write a relation as one JSON object per line. Every tuple is
    /// converted before the first line is written, so an unsupported value
    /// leaves the output untouched.
    pub fn write_relation(&mut self, relation: &Relation) -> Result<()> {
        let lines = relation
            .iter()
            .map(|tuple| -> Result<String> {
                let obj = tuple
                    .iter()
                    .map(|(name, value)| {
                        scalar_to_json(name, value).map(|v| (name.to_string(), v))
                    })
                    .collect::<Result<Map<String, Value>>>()?;
                Ok(serde_json::to_string(&obj)?)
            })
            .collect::<Result<Vec<String>>>()?;

        for line in &lines {
            writeln!(self.writer, "{}", line)?;
        }
        self.writer.flush()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(rows = lines.len(), "wrote jsonl");

        Ok(())
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| IngestionError::Io(e.into_error()))
    }
}
