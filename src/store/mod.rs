//! Flat-file persistence: one JSON document holding slots and appointments.
//! The slot/appointment lists are externally produced data; the store only
//! loads, filters and rewrites them, there is no query engine underneath.

pub mod log;

use crate::errors::{AppError, AppResult};
use crate::models::{Appointment, Slot};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CalendarData {
    #[serde(default)]
    pub slots: Vec<Slot>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

pub struct Store {
    path: PathBuf,
    pub data: CalendarData,
}

impl Store {
    /// Open the data file, failing with a hint when `init` has not run yet.
    pub fn open(path: &str) -> AppResult<Self> {
        let p = PathBuf::from(path);
        if !p.exists() {
            return Err(AppError::StoreMissing(format!(
                "{} (run `tutorcal init` first)",
                p.display()
            )));
        }

        let content = fs::read_to_string(&p)?;
        let data: CalendarData = serde_json::from_str(&content)?;

        Ok(Self { path: p, data })
    }

    pub fn save(&self) -> AppResult<()> {
        let json = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Next free appointment id (ids are never reused within a file).
    pub fn next_appointment_id(&self) -> u32 {
        self.data
            .appointments
            .iter()
            .map(|a| a.id)
            .max()
            .map(|m| m + 1)
            .unwrap_or(1)
    }

    pub fn appointment(&self, id: u32) -> Option<&Appointment> {
        self.data.appointments.iter().find(|a| a.id == id)
    }

    pub fn appointment_mut(&mut self, id: u32) -> Option<&mut Appointment> {
        self.data.appointments.iter_mut().find(|a| a.id == id)
    }

    pub fn remove_appointment(&mut self, id: u32) -> Option<Appointment> {
        let idx = self.data.appointments.iter().position(|a| a.id == id)?;
        Some(self.data.appointments.remove(idx))
    }

    pub fn slots_on(&self, date: NaiveDate) -> Vec<&Slot> {
        self.data.slots.iter().filter(|s| s.date == date).collect()
    }

    /// Replace all slots on a date (used by `slots --generate`).
    pub fn replace_slots_on(&mut self, date: NaiveDate, slots: Vec<Slot>) {
        self.data.slots.retain(|s| s.date != date);
        self.data.slots.extend(slots);
        self.data.slots.sort_by_key(|s| (s.date, s.time));
    }
}
