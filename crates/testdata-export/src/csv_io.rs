//! CSV conversion for exported tables.
//!
//! Every value is written in its `Display` form: decimals keep two places,
//! dates are ISO-8601 and booleans are `true`/`false`. Quoting follows
//! RFC 4180 via the `csv` crate.

use crate::error::{ExportError, Result};
use crate::json_io::kind_of;
use csv::{ReaderBuilder, Writer};
use std::io::Write;
use std::path::Path;
use testdata_core::{FieldDefinition, FieldValue, Record, Table};

/// UTF-8 byte order mark, understood by spreadsheet tools.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Get the CSV record (vector of strings) for a record.
pub fn record_to_csv(record: &Record) -> Vec<String> {
    record.iter().map(|(_, value)| value.to_string()).collect()
}

/// Write a table as CSV with a header row.
pub fn write_csv<W: Write, T: Table + ?Sized>(
    mut writer: W,
    table: &T,
    excel_bom: bool,
) -> Result<()> {
    if excel_bom {
        writer.write_all(UTF8_BOM)?;
    }

    let mut writer = Writer::from_writer(writer);
    writer.write_record(table.field_names())?;
    for record in table.records() {
        writer.write_record(record_to_csv(record))?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a CSV file with a header row back into records.
///
/// A leading byte order mark is skipped. Columns that are not in `fields`
/// are read as text.
pub fn read_csv<P: AsRef<Path>>(path: P, fields: &[FieldDefinition]) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(content);
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(String::is_empty) {
        return Err(ExportError::Shape {
            path: path.to_path_buf(),
            detail: "missing header row".to_string(),
        });
    }

    let kinds: Vec<_> = headers.iter().map(|name| kind_of(fields, name)).collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = Record::with_capacity(headers.len());
        for ((name, kind), cell) in headers.iter().zip(&kinds).zip(row.iter()) {
            record.push(name.as_str(), FieldValue::parse(cell, *kind)?);
        }
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use tempfile::TempDir;
    use testdata_core::{Category, Dataset};

    fn characters() -> Dataset {
        let mut dataset = Dataset::new(Category::Character, Category::Character.fixed_fields());
        dataset
            .push(
                Record::new()
                    .with("id", 1_i64)
                    .with("name", "Тёмный Рыцарь")
                    .with("class", "Warrior")
                    .with("level", 42_i64),
            )
            .unwrap();
        dataset
            .push(
                Record::new()
                    .with("id", 2_i64)
                    .with("name", "Shadow, \"the\" Blade")
                    .with("class", "Rogue")
                    .with("level", 7_i64),
            )
            .unwrap();
        dataset
    }

    #[test]
    fn test_write_csv() {
        let mut out = Vec::new();
        write_csv(&mut out, &characters(), false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "id,name,class,level\n\
             1,Тёмный Рыцарь,Warrior,42\n\
             2,\"Shadow, \"\"the\"\" Blade\",Rogue,7\n"
        );
    }

    #[test]
    fn test_bom_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("characters.csv");
        let dataset = characters();

        let mut out = Vec::new();
        write_csv(&mut out, &dataset, true).unwrap();
        assert!(out.starts_with(UTF8_BOM));
        std::fs::write(&path, &out).unwrap();

        let records = read_csv(&path, &Category::Character.fixed_fields()).unwrap();
        assert_eq!(records, dataset.records());
    }

    #[test]
    fn test_read_csv_coerces_kinds() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prices.csv");
        std::fs::write(&path, "id,price\n1,10.50\n2,19.99\n").unwrap();

        let records = read_csv(&path, &Category::Price.fixed_fields()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].get("price"),
            Some(&FieldValue::Decimal(Decimal::new(1050, 2)))
        );
        assert_eq!(records[1].get("id"), Some(&FieldValue::Integer(2)));
    }

    #[test]
    fn test_read_csv_bad_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prices.csv");
        std::fs::write(&path, "id,price\n1,cheap\n").unwrap();

        let err = read_csv(&path, &Category::Price.fixed_fields()).unwrap_err();
        assert!(matches!(err, ExportError::Value(_)));
    }
}
