//! CSV loading. The header row names the attributes.

use std::collections::BTreeMap;
use std::io::Read;

use ::csv::ReaderBuilder;
use rels_core::{Relation, Scalar, Tuple};

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct CsvOptions {
    pub delimiter: u8,
    /// Infer `Null`/`Bool`/`I64`/`F64` from cell text; otherwise every
    /// cell is a `Str`.
    pub infer_types: bool,
    pub trim: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            infer_types: true,
            trim: true,
        }
    }
}

/// Infer a scalar from one cell. Empty cells are `Null`. Only finite floats
/// are inferred; `inf` or `NaN` text stays a `Str`.
pub fn infer_scalar(cell: &str) -> Scalar {
    if cell.is_empty() {
        return Scalar::Null;
    }
    if let Ok(b) = cell.parse::<bool>() {
        return Scalar::Bool(b);
    }
    if let Ok(i) = cell.parse::<i64>() {
        return Scalar::I64(i);
    }
    if let Ok(f) = cell.parse::<f64>() {
        if f.is_finite() {
            return Scalar::F64(f);
        }
    }
    Scalar::Str(cell.to_string())
}

pub fn read_csv<R: Read>(reader: R, opts: &CsvOptions) -> Result<Relation> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(opts.delimiter)
        .trim(if opts.trim {
            ::csv::Trim::All
        } else {
            ::csv::Trim::None
        })
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut tuples = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let mut fields = BTreeMap::new();
        for (name, cell) in headers.iter().zip(record.iter()) {
            let value = if opts.infer_types {
                infer_scalar(cell)
            } else {
                Scalar::Str(cell.to_string())
            };
            fields.insert(name.clone(), value);
        }
        tuples.push(Tuple::from_map(fields));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(rows = tuples.len(), columns = headers.len(), "read csv");

    Ok(Relation::new(tuples))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer() {
        assert_eq!(infer_scalar(""), Scalar::Null);
        assert_eq!(infer_scalar("true"), Scalar::Bool(true));
        assert_eq!(infer_scalar("42"), Scalar::I64(42));
        assert_eq!(infer_scalar("4.5"), Scalar::F64(4.5));
        assert_eq!(infer_scalar("abc"), Scalar::from("abc"));
        for text in ["NaN", "inf", "-Infinity"] {
            assert_eq!(infer_scalar(text), Scalar::from(text));
        }
    }

    #[test]
    fn test_read_csv() {
        let data = "id,name,age\n1,ann,31\n2,bob,\n";
        let rel = read_csv(data.as_bytes(), &CsvOptions::default()).unwrap();
        assert_eq!(rel.len(), 2);
        assert_eq!(rel[0].value("name"), &Scalar::from("ann"));
        assert_eq!(rel[0].value("age"), &Scalar::I64(31));
        assert!(rel[1].value("age").is_null());
    }

    #[test]
    fn test_read_csv_without_inference() {
        let data = "id;flag\n7;true\n";
        let opts = CsvOptions {
            delimiter: b';',
            infer_types: false,
            ..CsvOptions::default()
        };
        let rel = read_csv(data.as_bytes(), &opts).unwrap();
        assert_eq!(rel[0].value("id"), &Scalar::from("7"));
        assert_eq!(rel[0].value("flag"), &Scalar::from("true"));
    }

    #[test]
    fn test_ragged_row_is_an_error() {
        let data = "a,b\n1,2,3\n";
        assert!(read_csv(data.as_bytes(), &CsvOptions::default()).is_err());
    }
}
