use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A bookable time unit on a given date.
///
/// Slots are produced externally (generated or imported) and are read-only
/// input for the grid builder; booking never mutates them in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>, // hourly rate, falls back to config when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booked_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl Slot {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date,
            time,
            available: true,
            price: None,
            booked_by: None,
            subject: None,
        }
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}
