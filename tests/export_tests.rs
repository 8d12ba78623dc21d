mod common;
use common::{init_data_with_bookings, setup_test_data, tc, temp_out};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_export_csv_creates_file_with_header() {
    let data_path = setup_test_data("export_csv");
    init_data_with_bookings(&data_path);

    let out = temp_out("export_csv", "csv");

    tc().args([
        "--data",
        &data_path,
        "--test",
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--force",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();

    let header = lines.next().expect("header line");
    assert!(header.contains("id"));
    assert!(header.contains("student"));
    assert!(header.contains("status"));

    // one line per appointment, date/time ordered
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("2030-06-10"));
    assert!(rows[1].contains("2030-06-12"));
}

#[test]
fn test_export_json_is_parseable() {
    let data_path = setup_test_data("export_json");
    init_data_with_bookings(&data_path);

    let out = temp_out("export_json", "json");

    tc().args([
        "--data",
        &data_path,
        "--test",
        "export",
        "--format",
        "json",
        "--file",
        &out,
        "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    let records = parsed.as_array().expect("array of records");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["student"], "Alice");
    assert_eq!(records[0]["status"], "pending");
}

#[test]
fn test_export_xlsx_creates_file() {
    let data_path = setup_test_data("export_xlsx");
    init_data_with_bookings(&data_path);

    let out = temp_out("export_xlsx", "xlsx");

    tc().args([
        "--data",
        &data_path,
        "--test",
        "export",
        "--format",
        "xlsx",
        "--file",
        &out,
        "--force",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_range_filters_appointments() {
    let data_path = setup_test_data("export_range");
    init_data_with_bookings(&data_path);

    let out = temp_out("export_range", "csv");

    // only the 2030-06-10 booking falls in this range
    tc().args([
        "--data",
        &data_path,
        "--test",
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--range",
        "2030-06-01:2030-06-11",
        "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("Alice"));
    assert!(!content.contains("Bob"));
}

#[test]
fn test_export_empty_range_warns_and_writes_nothing() {
    let data_path = setup_test_data("export_empty");
    init_data_with_bookings(&data_path);

    let out = temp_out("export_empty", "csv");

    tc().args([
        "--data",
        &data_path,
        "--test",
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--range",
        "1999",
        "--force",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("No appointments found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_requires_absolute_path() {
    let data_path = setup_test_data("export_relative");
    init_data_with_bookings(&data_path);

    tc().args([
        "--data",
        &data_path,
        "--test",
        "export",
        "--format",
        "csv",
        "--file",
        "relative_out.csv",
        "--force",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("must be absolute"));
}

#[test]
fn test_export_bad_range_is_rejected() {
    let data_path = setup_test_data("export_bad_range");
    init_data_with_bookings(&data_path);

    let out = temp_out("export_bad_range", "csv");

    tc().args([
        "--data",
        &data_path,
        "--test",
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--range",
        "06-2030",
        "--force",
    ])
    .assert()
    .failure();
}
