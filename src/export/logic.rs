// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::AppointmentExport;
use crate::export::range::parse_range;
use crate::store::Store;
use crate::ui::messages::warning;
use crate::utils::path::is_absolute;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use chrono::NaiveDate;
use std::io;
use std::path::Path;

/// High-level export flow.
pub struct ExportLogic;

impl ExportLogic {
    /// Export appointments.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"` or an expression like:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        store: &Store,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let records = collect_records(store, date_bounds);

        if records.is_empty() {
            warning("⚠️  No appointments found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&records, path)?,
            ExportFormat::Json => export_json(&records, path)?,
            ExportFormat::Xlsx => export_xlsx(&records, path)?,
        }

        Ok(())
    }
}

/// Select and flatten the appointments inside the bounds, date/time ordered.
fn collect_records(
    store: &Store,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> Vec<AppointmentExport> {
    let mut selected: Vec<&crate::models::Appointment> = store
        .data
        .appointments
        .iter()
        .filter(|a| match bounds {
            None => true,
            Some((start, end)) => a.date >= start && a.date <= end,
        })
        .collect();

    selected.sort_by_key(|a| (a.date, a.time, a.id));

    selected.into_iter().map(AppointmentExport::from).collect()
}
