//! Internal audit log: one JSON line per mutating operation, written next to
//! the data file.

use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String, // ISO 8601
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Path of the audit log sitting next to the data file.
pub fn log_file_for(data_file: &str) -> PathBuf {
    Path::new(data_file).with_extension("log")
}

/// Append one entry to the audit log. Failures here must never block the
/// operation being logged; callers ignore the result with a warning.
pub fn tclog(data_file: &str, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let entry = LogEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_for(data_file))?;

    let line = serde_json::to_string(&entry)?;
    writeln!(file, "{}", line)?;

    Ok(())
}

/// Read all entries; a missing log file is an empty log.
pub fn read_log(data_file: &str) -> AppResult<Vec<LogEntry>> {
    let path = log_file_for(data_file);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(&path)?;
    let mut entries = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        entries.push(serde_json::from_str(line)?);
    }

    Ok(entries)
}
