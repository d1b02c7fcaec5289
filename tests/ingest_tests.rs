//! End-to-end: host records and files in, operators, NDJSON out.

use rels::prelude::*;
use rels_ingest::csv::{read_csv, CsvOptions};
use rels_ingest::json::{read_jsonl, JsonlWriter};

struct Employee {
    id: i64,
    name: &'static str,
    dept: i64,
}

impl Record for Employee {
    fn field_names(&self) -> Vec<String> {
        vec!["id".into(), "name".into(), "dept".into()]
    }

    fn read_field(&self, name: &str) -> std::result::Result<Scalar, IngestionError> {
        match name {
            "id" => Ok(Scalar::I64(self.id)),
            "name" => Ok(Scalar::from(self.name)),
            "dept" => Ok(Scalar::I64(self.dept)),
            other => Err(IngestionError::unreadable(other, "unknown field")),
        }
    }
}

#[test]
fn test_records_csv_join_jsonl() {
    let staff = to_relation(&[
        Employee {
            id: 1,
            name: "ann",
            dept: 10,
        },
        Employee {
            id: 2,
            name: "bob",
            dept: 20,
        },
        Employee {
            id: 3,
            name: "cid",
            dept: 10,
        },
    ])
    .unwrap();

    let depts = read_csv(
        "dept_id,title\n10,eng\n30,ops\n".as_bytes(),
        &CsvOptions::default(),
    )
    .unwrap();

    // Build on the side whose key is unique; probe order (staff) drives output.
    let joined = depts
        .hash_join(&staff, &[Condition::eq("dept_id", "dept")])
        .project(&["name", "title"]);
    assert_eq!(joined.len(), 2);

    // Building on staff instead keeps only the last employee per department.
    let shadowed = staff.hash_join(&depts, &[Condition::eq("dept", "dept_id")]);
    assert_eq!(shadowed.len(), 1);
    assert_eq!(shadowed[0].value("name"), &Scalar::from("cid"));

    let mut writer = JsonlWriter::to_writer(Vec::new());
    writer.write_relation(&joined).unwrap();
    let bytes = writer.into_inner().unwrap();
    let text = String::from_utf8(bytes.clone()).unwrap();
    assert_eq!(
        text,
        "{\"name\":\"ann\",\"title\":\"eng\"}\n{\"name\":\"cid\",\"title\":\"eng\"}\n"
    );

    let back = read_jsonl(bytes.as_slice()).unwrap();
    assert_eq!(back, joined);
}

#[test]
fn test_json_values_as_records() {
    let rows = serde_json::json!([{"k": 1, "v": "a"}, {"k": 2, "v": null}]);
    let items = rows.as_array().cloned().unwrap_or_default();
    let rel = to_relation(&items).unwrap();
    assert_eq!(rel.len(), 2);
    assert!(rel[1].value("v").is_null());

    let bad = serde_json::json!([{"k": [1, 2]}]);
    let items = bad.as_array().cloned().unwrap_or_default();
    assert!(matches!(
        to_relation(&items),
        Err(IngestionError::UnsupportedValue { .. })
    ));
}

#[test]
fn test_build_tuple_from_flat_pairs() {
    let t = Tuple::build(&["id".into(), 1i64.into(), "name".into(), "a".into()]).unwrap();
    assert_eq!(t, people_row());
    assert!(matches!(
        Tuple::build(&["id".into()]),
        Err(Error::InvalidArgument(_))
    ));
}

fn people_row() -> Tuple {
    [("id", Scalar::I64(1)), ("name", Scalar::from("a"))]
        .into_iter()
        .collect()
}

#[test]
fn test_config_from_env() {
    std::env::set_var("RELS_JOIN_STRATEGY", "nested_loop");
    std::env::set_var("RELS_WARN_DUPLICATE_BUILD_KEYS", "true");
    let cfg = EngineConfig::from_env();
    std::env::remove_var("RELS_JOIN_STRATEGY");
    std::env::remove_var("RELS_WARN_DUPLICATE_BUILD_KEYS");

    assert_eq!(cfg.join_strategy, JoinStrategy::NestedLoop);
    assert!(cfg.warn_on_duplicate_build_keys);
}
