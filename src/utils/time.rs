//! Time utilities: parsing HH:MM, minute offsets, interval intersection.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_required_time(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Minutes from midnight for a wall-clock time.
pub fn minutes_from_midnight(t: NaiveTime) -> i64 {
    t.hour() as i64 * 60 + t.minute() as i64
}

/// Half-open interval intersection: [a1, a2) and [b1, b2).
pub fn intervals_intersect(a1: i64, a2: i64, b1: i64, b2: i64) -> bool {
    a1 < b2 && b1 < a2
}

/// "10:00-11:00" for a start time plus duration. Spills past midnight are
/// rendered mod 24h; the conflict math itself stays on raw minute offsets.
pub fn format_time_range(start: NaiveTime, duration_min: i64) -> String {
    let end = minutes_from_midnight(start) + duration_min;
    format!(
        "{}-{:02}:{:02}",
        start.format("%H:%M"),
        (end / 60) % 24,
        end % 60
    )
}
