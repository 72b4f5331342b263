//! Interactive session tests driven by scripted input.

use chrono::{Datelike, NaiveDate};
use qa_testdata::session::Session;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use testdata_core::{CharacterSettings, Settings, Table};
use testdata_generator::DataGenerator;

fn settings(output_dir: &Path) -> Settings {
    Settings {
        output_dir: output_dir.to_path_buf(),
        reference_date: NaiveDate::from_ymd_opt(2024, 6, 1),
        ..Settings::default()
    }
}

/// Run a session over `script` and return its transcript.
fn run_script(output_dir: &Path, script: &str) -> String {
    let generator = DataGenerator::with_seed(settings(output_dir), 7);
    let mut session = Session::with_generator(generator, script.as_bytes(), Vec::new());
    session.run().unwrap();
    String::from_utf8(session.into_output()).unwrap()
}

#[test]
fn test_generate_and_export_both_formats() {
    let dir = TempDir::new().unwrap();
    // en locale, prices, 3 records between 10 and 20, JSON and CSV, default name
    let out = run_script(dir.path(), "2\n6\n3\n10\n20\n3\n\n0\n");

    assert!(out.contains("Locale: en"));
    assert!(out.contains("Generated 3 prices:"));
    assert!(out.contains("Saved 3 records to"));
    assert!(out.trim_end().ends_with("Goodbye!"));

    let json: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("prices.json")).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 3);
    assert!(dir.path().join("prices.csv").exists());
}

#[test]
fn test_preview_is_limited() {
    let dir = TempDir::new().unwrap();
    // default locale, 10 users, skip export
    let out = run_script(dir.path(), "\n1\n\n0\n0\n");

    assert!(out.contains("Generated 10 users:"));
    assert!(out.contains("... and 5 more"));
    assert_eq!(out.matches("  id=").count(), 5);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_errors_keep_the_menu_running() {
    let dir = TempDir::new().unwrap();
    // unknown option, zero count, export before generating, then exit
    let out = run_script(dir.path(), "\n42\n1\n0\n10\n0\n");

    assert!(out.contains("Error: Unknown option '42'"));
    assert!(out.contains("Error: Invalid record count 0"));
    assert!(out.contains("Error: Nothing to export yet"));
    assert!(out.contains("Goodbye!"));
}

#[test]
fn test_invalid_number_is_reported() {
    let dir = TempDir::new().unwrap();
    let out = run_script(dir.path(), "\n1\nmany\n0\n");

    assert!(out.contains("Error: Invalid value 'many'"));
    assert!(out.contains("Goodbye!"));
}

#[test]
fn test_end_of_input_ends_session() {
    let dir = TempDir::new().unwrap();
    // input ends in the middle of the count prompt
    let out = run_script(dir.path(), "\n3\n");
    assert!(out.contains("How many emails?"));
    assert!(out.contains("Goodbye!"));

    // and before the locale prompt is answered
    run_script(dir.path(), "");
}

#[test]
fn test_custom_builtin_fields() {
    let dir = TempDir::new().unwrap();
    // custom, 2 records, built-in fields name and phone, JSON as people.json
    let out = run_script(dir.path(), "\n8\n2\n1\n1,3\n1\npeople\n0\n");
    assert!(out.contains("Saved 2 records to"));

    let json: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("people.json")).unwrap()).unwrap();
    for record in json.as_array().unwrap() {
        let keys: Vec<_> = record.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["id", "name", "phone"]);
    }
}

#[test]
fn test_custom_unknown_field_number() {
    let dir = TempDir::new().unwrap();
    let out = run_script(dir.path(), "\n8\n2\n1\n1,99\n0\n");
    assert!(out.contains("Error: Unknown field number '99'"));
}

#[test]
fn test_birth_dates() {
    let dir = TempDir::new().unwrap();
    let generator = DataGenerator::with_seed(settings(dir.path()), 7);
    // dates, 4 records, birth mode for ages 20..30, skip export
    let script = "\n7\n4\n2\n20\n30\n0\n0\n";
    let mut session = Session::with_generator(generator, script.as_bytes(), Vec::new());
    session.run().unwrap();

    let table = session.last_table().unwrap();
    assert_eq!(table.records().len(), 4);
    for record in table.records() {
        let date = record.get("date").and_then(|v| v.as_date()).unwrap();
        assert!((1994..=2004).contains(&date.year()), "unexpected {date}");
    }
}

#[test]
fn test_boundary_preset_and_export() {
    let dir = TempDir::new().unwrap();
    // boundary, strings, login preset, default charset, CSV
    let out = run_script(dir.path(), "\n9\n1\n1\n\n\n\n\n\n2\n\n0\n");

    assert!(out.contains("Boundary values for 'login':"));
    assert!(out.contains("NEGATIVE: login - Below minimum (2 < 3)"));
    assert!(out.contains("POSITIVE: login - Maximum (16)"));
    assert!(out.contains("NEGATIVE: login - Above maximum (17 > 16)"));

    let csv = fs::read_to_string(dir.path().join("bva_login.csv")).unwrap();
    assert!(csv.starts_with("field,value,length,boundary_type,description,expected_valid,test_case\n"));
    assert_eq!(csv.lines().count(), 7);
}

#[test]
fn test_boundary_custom_numeric_field() {
    let dir = TempDir::new().unwrap();
    // boundary, numbers, other field "stock" 0..50, skip export
    let out = run_script(dir.path(), "\n9\n2\n5\nstock\n0\n50\n0\n0\n");

    assert!(out.contains("NEGATIVE: stock - Below minimum (-1 < 0)"));
    assert!(out.contains("POSITIVE: stock - Minimum (0)"));
    assert!(out.contains("NEGATIVE: stock - Above maximum (51 > 50)"));
}

#[test]
fn test_export_last_result() {
    let dir = TempDir::new().unwrap();
    // 2 emails without export, then option 10 exports them as CSV
    let out = run_script(dir.path(), "\n3\n2\n\n0\n10\n2\nmail\n0\n");

    assert!(out.contains("Saved 2 records to"));
    let csv = fs::read_to_string(dir.path().join("mail.csv")).unwrap();
    assert_eq!(csv.lines().count(), 3);
}

#[test]
fn test_rejected_parameters_are_not_kept() {
    let dir = TempDir::new().unwrap();
    let generator = DataGenerator::with_seed(settings(dir.path()), 7);
    // characters with levels 30..10 fail, then a second run takes the defaults
    let script = "\n2\n5\n30\n10\n2\n\n\n\n0\n0\n";
    let mut session = Session::with_generator(generator, script.as_bytes(), Vec::new());
    session.run().unwrap();

    assert_eq!(session.settings().character, CharacterSettings::default());
    let out = String::from_utf8(session.into_output()).unwrap();
    assert!(out.contains("Error: Invalid level range"));
    assert_eq!(out.matches("Minimum level [1]").count(), 2);
    assert!(out.contains("Generated 5 characters:"));
}
