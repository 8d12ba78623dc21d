use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use tutorcal::core::grid::{GRID_CELLS, GridOptions, build_month_grid, week_start_from_config};
use tutorcal::models::rule::default_rules;
use tutorcal::models::{Slot, WeekPattern};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn slot(date: &str, time: &str) -> Slot {
    Slot::new(d(date), t(time))
}

fn opts(year: i32, month: u32) -> GridOptions {
    GridOptions {
        year,
        month,
        min_date: d("2030-01-01"),
        max_date: None,
        pattern: WeekPattern::empty(),
        week_start: Weekday::Sun,
        slot_duration_min: 60,
        today: d("2030-06-01"),
    }
}

#[test]
fn test_grid_always_has_42_cells() {
    let rules = default_rules(15, 1);

    // months with 28, 29, 30 and 31 days, different starting weekdays
    for (y, m) in [
        (2030, 1),
        (2030, 2),
        (2024, 2), // leap February
        (2030, 4),
        (2030, 6),
        (2030, 12),
    ] {
        let grid = build_month_grid(&opts(y, m), &[], &[], &rules);
        assert_eq!(grid.len(), GRID_CELLS, "month {y}-{m:02}");
    }
}

#[test]
fn test_grid_covers_whole_month_with_padding() {
    let rules = default_rules(15, 1);
    let grid = build_month_grid(&opts(2030, 6), &[], &[], &rules);

    // every day of June 2030 is present and flagged as current month
    let current: Vec<_> = grid.iter().filter(|c| c.is_current_month).collect();
    assert_eq!(current.len(), 30);
    assert_eq!(current.first().unwrap().date, d("2030-06-01"));
    assert_eq!(current.last().unwrap().date, d("2030-06-30"));

    // grid starts on the configured week start
    assert_eq!(grid[0].date.weekday(), Weekday::Sun);

    // padding cells are never available
    assert!(
        grid.iter()
            .filter(|c| !c.is_current_month)
            .all(|c| !c.is_available)
    );
}

#[test]
fn test_day_available_needs_an_open_slot() {
    let rules = default_rules(15, 1);
    let slots = vec![slot("2030-06-10", "10:00")];

    let grid = build_month_grid(&opts(2030, 6), &slots, &[], &rules);

    let day10 = grid.iter().find(|c| c.date == d("2030-06-10")).unwrap();
    assert!(day10.is_available);

    // a day without slots is not available even inside the bounds
    let day11 = grid.iter().find(|c| c.date == d("2030-06-11")).unwrap();
    assert!(!day11.is_available);
}

#[test]
fn test_day_with_only_taken_slots_is_not_available() {
    let rules = default_rules(15, 1);
    let mut s = slot("2030-06-10", "10:00");
    s.available = false;

    let grid = build_month_grid(&opts(2030, 6), &[s], &[], &rules);

    let day10 = grid.iter().find(|c| c.date == d("2030-06-10")).unwrap();
    assert!(!day10.is_available);
}

#[test]
fn test_days_outside_bounds_are_never_available() {
    let rules = default_rules(15, 1);
    let slots = vec![
        slot("2030-06-05", "10:00"),
        slot("2030-06-10", "10:00"),
        slot("2030-06-25", "10:00"),
    ];

    let mut o = opts(2030, 6);
    o.min_date = d("2030-06-08");
    o.max_date = Some(d("2030-06-20"));

    let grid = build_month_grid(&o, &slots, &[], &rules);

    let before = grid.iter().find(|c| c.date == d("2030-06-05")).unwrap();
    let inside = grid.iter().find(|c| c.date == d("2030-06-10")).unwrap();
    let after = grid.iter().find(|c| c.date == d("2030-06-25")).unwrap();

    assert!(!before.is_available);
    assert!(inside.is_available);
    assert!(!after.is_available);
}

#[test]
fn test_weekly_pattern_excludes_weekdays() {
    let rules = default_rules(15, 1);
    // 2030-06-10 is a Monday
    assert_eq!(d("2030-06-10").weekday(), Weekday::Mon);
    let slots = vec![slot("2030-06-10", "10:00")];

    let mut o = opts(2030, 6);
    o.pattern = WeekPattern::parse("tue,wed").unwrap();

    let grid = build_month_grid(&o, &slots, &[], &rules);
    let day10 = grid.iter().find(|c| c.date == d("2030-06-10")).unwrap();
    assert!(!day10.is_available, "pattern must win over live slots");

    // empty pattern = no weekday restriction
    let grid = build_month_grid(&opts(2030, 6), &slots, &[], &rules);
    let day10 = grid.iter().find(|c| c.date == d("2030-06-10")).unwrap();
    assert!(day10.is_available);
}

#[test]
fn test_is_today_flag() {
    let rules = default_rules(15, 1);
    let mut o = opts(2030, 6);
    o.today = d("2030-06-15");

    let grid = build_month_grid(&o, &[], &[], &rules);

    let marked: Vec<_> = grid.iter().filter(|c| c.is_today).collect();
    assert_eq!(marked.len(), 1);
    assert_eq!(marked[0].date, d("2030-06-15"));
}

#[test]
fn test_monday_week_start() {
    let rules = default_rules(15, 1);
    let mut o = opts(2030, 6);
    o.week_start = week_start_from_config("mon");

    let grid = build_month_grid(&o, &[], &[], &rules);
    assert_eq!(grid.len(), GRID_CELLS);
    assert_eq!(grid[0].date.weekday(), Weekday::Mon);

    // June 2030 starts on a Saturday; with Monday start the padding is 5 days
    assert_eq!(grid[0].date, d("2030-05-27"));
}

#[test]
fn test_grid_slots_carry_conflicts() {
    use tutorcal::models::Appointment;

    let rules = default_rules(15, 1);
    let slots = vec![slot("2030-06-10", "10:00"), slot("2030-06-10", "15:00")];
    let appts = vec![Appointment::new(
        1,
        d("2030-06-10"),
        t("10:30"),
        60,
        "Alice".into(),
        "Math".into(),
    )];

    let grid = build_month_grid(&opts(2030, 6), &slots, &appts, &rules);
    let day10 = grid.iter().find(|c| c.date == d("2030-06-10")).unwrap();

    let at10 = day10
        .slots
        .iter()
        .find(|v| v.slot.time == t("10:00"))
        .unwrap();
    let at15 = day10
        .slots
        .iter()
        .find(|v| v.slot.time == t("15:00"))
        .unwrap();

    assert!(at10.has_conflicts(), "10:00 slot overlaps the 10:30 lesson");
    assert!(!at15.has_conflicts());
}
