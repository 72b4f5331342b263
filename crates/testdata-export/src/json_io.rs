//! JSON conversion for exported tables.
//!
//! Forward: [`FieldValue`] → JSON. Integers and booleans become JSON numbers
//! and booleans, dates become ISO-8601 strings, and decimals are stored as
//! strings to preserve their scale ("12.50" stays "12.50").
//!
//! Reverse: JSON → [`FieldValue`] for a given [`FieldKind`].

use crate::error::{ExportError, Result};
use rust_decimal::Decimal;
use serde_json::{json, Map, Value};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use testdata_core::{FieldDefinition, FieldKind, FieldValue, Record, Table};

/// Convert a value to JSON.
pub fn value_to_json(value: &FieldValue) -> Value {
    match value {
        FieldValue::Integer(i) => json!(*i),
        // Decimal - store as string to preserve precision
        FieldValue::Decimal(d) => json!(d.to_string()),
        FieldValue::Text(s) => json!(s),
        FieldValue::Date(_) => json!(value.to_string()),
        FieldValue::Bool(b) => json!(*b),
    }
}

/// Convert a record to a JSON object with keys in field order.
pub fn record_to_json(record: &Record) -> Map<String, Value> {
    record
        .iter()
        .map(|(name, value)| (name.to_string(), value_to_json(value)))
        .collect()
}

/// Write a table as a pretty-printed JSON array.
pub fn write_json<W: Write, T: Table + ?Sized>(mut writer: W, table: &T) -> Result<()> {
    let rows: Vec<Value> = table
        .records()
        .iter()
        .map(|record| Value::Object(record_to_json(record)))
        .collect();

    serde_json::to_writer_pretty(&mut writer, &rows)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Convert a JSON value back to a value of the given kind.
///
/// Strings are accepted for every kind, since decimals and dates are
/// exported as strings.
pub fn json_to_value(value: &Value, kind: FieldKind) -> testdata_core::Result<FieldValue> {
    let invalid = || testdata_core::Error::InvalidValue {
        value: value.to_string(),
        kind,
    };

    match (kind, value) {
        (_, Value::String(s)) => FieldValue::parse(s, kind),
        (FieldKind::Integer, Value::Number(n)) => {
            n.as_i64().map(FieldValue::Integer).ok_or_else(invalid)
        }
        (FieldKind::Decimal, Value::Number(n)) => Decimal::from_str(&n.to_string())
            .map(FieldValue::Decimal)
            .map_err(|_| invalid()),
        (FieldKind::Bool, Value::Bool(b)) => Ok(FieldValue::Bool(*b)),
        (FieldKind::Text, Value::Number(n)) => Ok(FieldValue::Text(n.to_string())),
        (FieldKind::Text, Value::Bool(b)) => Ok(FieldValue::Text(b.to_string())),
        _ => Err(invalid()),
    }
}

/// Read a JSON array of objects back into records.
///
/// Keys are kept in file order. Keys that are not in `fields` are read as
/// text, so a caller can compare each record's field set with `fields`.
pub fn read_json<P: AsRef<Path>>(path: P, fields: &[FieldDefinition]) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&content)?;

    let shape = |detail: String| ExportError::Shape {
        path: path.to_path_buf(),
        detail,
    };

    let rows = match document {
        Value::Array(rows) => rows,
        other => return Err(shape(format!("expected a top-level array, found {other}"))),
    };

    rows.iter()
        .enumerate()
        .map(|(index, row)| -> Result<Record> {
            let object = row
                .as_object()
                .ok_or_else(|| shape(format!("element {index} is not an object")))?;

            let mut record = Record::with_capacity(object.len());
            for (name, value) in object {
                let kind = kind_of(fields, name);
                record.push(name.as_str(), json_to_value(value, kind)?);
            }
            Ok(record)
        })
        .collect()
}

pub(crate) fn kind_of(fields: &[FieldDefinition], name: &str) -> FieldKind {
    fields
        .iter()
        .find(|f| f.name == name)
        .map(|f| f.kind)
        .unwrap_or(FieldKind::Text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use testdata_core::{Category, Dataset};

    #[test]
    fn test_value_to_json() {
        assert_eq!(value_to_json(&FieldValue::Integer(7)), json!(7));
        assert_eq!(
            value_to_json(&FieldValue::Decimal(Decimal::new(1250, 2))),
            json!("12.50")
        );
        assert_eq!(
            value_to_json(&FieldValue::Date(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())),
            json!("2024-03-09")
        );
        assert_eq!(value_to_json(&FieldValue::Bool(false)), json!(false));
    }

    #[test]
    fn test_record_keys_keep_field_order() {
        let record = Record::new()
            .with("id", 1_i64)
            .with("name", "Анна Смирнова")
            .with("email", "anna1@mail.ru");

        let object = record_to_json(&record);
        let keys: Vec<_> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "name", "email"]);
    }

    #[test]
    fn test_write_json_pretty_array() {
        let mut dataset = Dataset::new(Category::Price, Category::Price.fixed_fields());
        dataset
            .push(
                Record::new()
                    .with("id", 1_i64)
                    .with("price", Decimal::new(1000, 2)),
            )
            .unwrap();

        let mut out = Vec::new();
        write_json(&mut out, &dataset).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "[\n  {\n    \"id\": 1,\n    \"price\": \"10.00\"\n  }\n]\n"
        );
    }

    #[test]
    fn test_json_to_value() {
        assert_eq!(
            json_to_value(&json!("12.50"), FieldKind::Decimal).unwrap(),
            FieldValue::Decimal(Decimal::new(1250, 2))
        );
        assert_eq!(
            json_to_value(&json!(3), FieldKind::Integer).unwrap(),
            FieldValue::Integer(3)
        );
        assert_eq!(
            json_to_value(&json!(42), FieldKind::Text).unwrap(),
            FieldValue::text("42")
        );
        assert!(json_to_value(&json!(null), FieldKind::Text).is_err());
        assert!(json_to_value(&json!(1.5), FieldKind::Integer).is_err());
    }

    #[test]
    fn test_read_json_rejects_non_array() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, r#"{"id": 1}"#).unwrap();

        let err = read_json(&path, &Category::User.fixed_fields()).unwrap_err();
        assert!(matches!(err, ExportError::Shape { .. }));
    }
}
