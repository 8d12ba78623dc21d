// src/export/model.rs

use crate::models::Appointment;
use serde::Serialize;

/// Flat record for appointment exports.
#[derive(Serialize, Clone, Debug)]
pub struct AppointmentExport {
    pub id: u32,
    pub date: String,
    pub time: String,
    pub duration_min: i64,
    pub student: String,
    pub subject: String,
    pub status: String,
    pub price: String,
    pub created_at: String,
}

impl From<&Appointment> for AppointmentExport {
    fn from(a: &Appointment) -> Self {
        Self {
            id: a.id,
            date: a.date_str(),
            time: a.time_str(),
            duration_min: a.duration_min,
            student: a.student.clone(),
            subject: a.subject.clone(),
            status: a.status.as_str().to_string(),
            price: a.price.map(|p| format!("{p:.2}")).unwrap_or_default(),
            created_at: a.created_at.clone(),
        }
    }
}

/// Header per CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "date",
        "time",
        "duration_min",
        "student",
        "subject",
        "status",
        "price",
        "created_at",
    ]
}

/// One export record as a row of display strings.
pub(crate) fn appointment_to_row(a: &AppointmentExport) -> Vec<String> {
    vec![
        a.id.to_string(),
        a.date.clone(),
        a.time.clone(),
        a.duration_min.to_string(),
        a.student.clone(),
        a.subject.clone(),
        a.status.clone(),
        a.price.clone(),
        a.created_at.clone(),
    ]
}
