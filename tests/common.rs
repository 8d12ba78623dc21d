#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tc() -> Command {
    cargo_bin_cmd!("tutorcal")
}

/// Create a unique test data-file path inside the system temp dir and remove
/// any existing file (plus its sibling audit log)
pub fn setup_test_data(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tutorcal.json", name));
    let data_path = path.to_string_lossy().to_string();
    fs::remove_file(&data_path).ok();
    fs::remove_file(path.with_extension("log")).ok();
    data_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a data file and book a small dataset useful for many tests
pub fn init_data_with_bookings(data_path: &str) {
    // init data file
    tc().args(["--data", data_path, "--test", "init"])
        .assert()
        .success();

    // a couple of future bookings via CLI
    tc().args([
        "--data",
        data_path,
        "--test",
        "book",
        "2030-06-10",
        "10:00",
        "--student",
        "Alice",
        "--subject",
        "Math",
    ])
    .assert()
    .success();

    tc().args([
        "--data",
        data_path,
        "--test",
        "book",
        "2030-06-12",
        "14:00",
        "--student",
        "Bob",
        "--subject",
        "Physics",
    ])
    .assert()
    .success();
}
