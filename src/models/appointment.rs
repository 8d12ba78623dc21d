use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(AppointmentStatus::Pending),
            "confirmed" => Some(AppointmentStatus::Confirmed),
            "completed" => Some(AppointmentStatus::Completed),
            "cancelled" => Some(AppointmentStatus::Cancelled),
            _ => None,
        }
    }

    /// Cancelled bookings release their slot and never count for conflicts.
    pub fn is_active(&self) -> bool {
        !matches!(self, AppointmentStatus::Cancelled)
    }
}

/// A confirmed or pending booking occupying a slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_min: i64,
    pub student: String,
    pub subject: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub created_at: String,  // ISO8601
}

impl Appointment {
    /// High-level constructor for bookings created from the CLI.
    /// New bookings always start as `pending`; `created_at` is stamped now.
    pub fn new(
        id: u32,
        date: NaiveDate,
        time: NaiveTime,
        duration_min: i64,
        student: String,
        subject: String,
    ) -> Self {
        Self {
            id,
            date,
            time,
            duration_min,
            student,
            subject,
            status: AppointmentStatus::Pending,
            notes: String::new(),
            price: None,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    /// Start of the booking in minutes from midnight.
    pub fn start_min(&self) -> i64 {
        self.time.hour() as i64 * 60 + self.time.minute() as i64
    }

    /// End of the booking in minutes from midnight (half-open).
    pub fn end_min(&self) -> i64 {
        self.start_min() + self.duration_min
    }
}
