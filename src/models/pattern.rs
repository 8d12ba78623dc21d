use crate::errors::{AppError, AppResult};
use chrono::Weekday;

/// The tutor's weekly working pattern.
///
/// An empty pattern means "no restriction": every weekday is a working day.
/// Stored in config as weekday names ("mon", "tue", ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekPattern {
    days: Vec<Weekday>,
}

impl WeekPattern {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a comma-separated weekday list, e.g. "mon,tue,fri".
    /// An empty string yields the unrestricted pattern.
    pub fn parse(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::empty());
        }

        let mut days = Vec::new();
        for part in trimmed.split(',') {
            let day = parse_weekday(part.trim())
                .ok_or_else(|| AppError::InvalidWeekday(part.trim().to_string()))?;
            if !days.contains(&day) {
                days.push(day);
            }
        }
        Ok(Self { days })
    }

    /// Whether the pattern allows working on the given weekday.
    pub fn allows(&self, day: Weekday) -> bool {
        self.days.is_empty() || self.days.contains(&day)
    }
}

fn parse_weekday(s: &str) -> Option<Weekday> {
    match s.to_lowercase().as_str() {
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "sat" | "saturday" => Some(Weekday::Sat),
        "sun" | "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}
