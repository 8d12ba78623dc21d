//! Slot generation and display grouping.

use crate::models::{Slot, WeekPattern};
use chrono::{Datelike, NaiveDate, NaiveTime};
use std::collections::BTreeMap;

/// Generate hourly-style slots for one day: `[start_hour, end_hour)` cut in
/// `slot_len_min` steps. Returns nothing when the pattern excludes the day.
pub fn generate_day_slots(
    date: NaiveDate,
    pattern: &WeekPattern,
    start_hour: u32,
    end_hour: u32,
    slot_len_min: i64,
    price: Option<f64>,
) -> Vec<Slot> {
    if !pattern.allows(date.weekday()) {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut minute = (start_hour as i64 * 60).min(24 * 60);
    let end = (end_hour as i64 * 60).min(24 * 60);

    while minute + slot_len_min <= end {
        let time = NaiveTime::from_hms_opt((minute / 60) as u32, (minute % 60) as u32, 0).unwrap();
        let mut slot = Slot::new(date, time);
        slot.price = price;
        out.push(slot);
        minute += slot_len_min;
    }

    out
}

/// Group slots by date, keeping each day's slots in time order.
pub fn group_slots_by_date(slots: &[Slot]) -> BTreeMap<NaiveDate, Vec<&Slot>> {
    let mut groups: BTreeMap<NaiveDate, Vec<&Slot>> = BTreeMap::new();

    for slot in slots {
        groups.entry(slot.date).or_default().push(slot);
    }

    for day in groups.values_mut() {
        day.sort_by_key(|s| s.time);
    }

    groups
}

/// "09:00 10:00 11:00", the compact per-day time list used in listings.
pub fn format_day_times(slots: &[&Slot], only_available: bool) -> String {
    slots
        .iter()
        .filter(|s| !only_available || s.available)
        .map(|s| s.time_str())
        .collect::<Vec<_>>()
        .join(" ")
}
