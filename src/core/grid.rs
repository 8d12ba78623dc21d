//! Month availability grid: 6 full weeks (42 cells) around a target month,
//! each day annotated with availability and per-slot conflict info.
//!
//! Pure derivation from its inputs. The grid is rebuilt whole on every call
//! instead of patched incrementally; input sizes are tens of slots, so
//! recomputation keeps the invariants trivial.

use crate::core::conflict::{Candidate, detect_conflicts};
use crate::models::{Appointment, CalendarDay, ConflictRule, Slot, SlotView, WeekPattern};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub const GRID_CELLS: usize = 42;

#[derive(Debug, Clone)]
pub struct GridOptions {
    pub year: i32,
    pub month: u32,
    /// First selectable day; the CLI defaults this to today.
    pub min_date: NaiveDate,
    /// Last selectable day, if any.
    pub max_date: Option<NaiveDate>,
    /// Weekly working pattern; empty means no weekday restriction.
    pub pattern: WeekPattern,
    /// First column of the grid (Sunday in the default layout).
    pub week_start: Weekday,
    /// Lesson length assumed when eagerly conflict-checking each slot.
    pub slot_duration_min: i64,
    /// "Today" for the is_today flag, injected for reproducibility.
    pub today: NaiveDate,
}

/// Build the 42-cell grid for the month in `opts`.
///
/// Always returns exactly [`GRID_CELLS`] entries; leading and trailing days
/// of the adjacent months pad the first and last week.
pub fn build_month_grid(
    opts: &GridOptions,
    slots: &[Slot],
    appointments: &[Appointment],
    rules: &[ConflictRule],
) -> Vec<CalendarDay> {
    let first = NaiveDate::from_ymd_opt(opts.year, opts.month, 1)
        .unwrap_or_else(|| opts.today.with_day(1).unwrap());

    let lead = days_from_week_start(first.weekday(), opts.week_start);
    let start = first - Duration::days(lead as i64);

    let mut grid = Vec::with_capacity(GRID_CELLS);

    for offset in 0..GRID_CELLS {
        let date = start + Duration::days(offset as i64);
        grid.push(build_day(date, opts, slots, appointments, rules));
    }

    grid
}

fn build_day(
    date: NaiveDate,
    opts: &GridOptions,
    slots: &[Slot],
    appointments: &[Appointment],
    rules: &[ConflictRule],
) -> CalendarDay {
    let is_current_month = date.year() == opts.year && date.month() == opts.month;

    let day_slots: Vec<SlotView> = slots
        .iter()
        .filter(|s| s.date == date)
        .map(|s| SlotView {
            conflicts: detect_conflicts(
                &Candidate::new(s.date, s.time, opts.slot_duration_min),
                appointments,
                rules,
            ),
            slot: s.clone(),
        })
        .collect();

    let in_bounds =
        date >= opts.min_date && opts.max_date.map(|max| date <= max).unwrap_or(true);

    let is_available = is_current_month
        && in_bounds
        && opts.pattern.allows(date.weekday())
        && day_slots.iter().any(|v| v.slot.available);

    CalendarDay {
        date,
        is_current_month,
        is_today: date == opts.today,
        is_available,
        slots: day_slots,
    }
}

/// Column index (0..6) of a weekday in a grid starting on `week_start`.
fn days_from_week_start(day: Weekday, week_start: Weekday) -> u32 {
    (day.num_days_from_sunday() + 7 - week_start.num_days_from_sunday()) % 7
}

/// Parse the config `week_start` value; anything but "mon" means Sunday.
pub fn week_start_from_config(code: &str) -> Weekday {
    if code.eq_ignore_ascii_case("mon") {
        Weekday::Mon
    } else {
        Weekday::Sun
    }
}
