use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::{GridOptions, build_month_grid, week_start_from_config};
use crate::errors::{AppError, AppResult};
use crate::models::WeekPattern;
use crate::models::rule::default_rules;
use crate::store::Store;
use crate::ui::messages::warning;
use crate::utils::colors::{GREY, RESET, color_for_day};
use crate::utils::date;
use crate::utils::formatting::bold;
use chrono::{Datelike, Weekday};

/// Render the 6-week availability grid for a month.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Grid {
        month,
        min_date,
        max_date,
        slots,
    } = cmd
    {
        let (year, mon) = date::parse_month(month.as_deref())
            .ok_or_else(|| AppError::InvalidDate(month.clone().unwrap_or_default()))?;

        let min = match min_date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };
        let max = match max_date {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        let store = Store::open(&cfg.data_file)?;
        let pattern = WeekPattern::parse(&cfg.working_days)?;
        let rules = default_rules(cfg.buffer_min, cfg.max_capacity);

        let opts = GridOptions {
            year,
            month: mon,
            min_date: min,
            max_date: max,
            pattern,
            week_start: week_start_from_config(&cfg.week_start),
            slot_duration_min: cfg.default_duration_min,
            today: date::today(),
        };

        let grid = build_month_grid(&opts, &store.data.slots, &store.data.appointments, &rules);

        //
        // Header: month title + weekday row
        //
        println!(
            "\n{}\n",
            bold(&format!("{} {}", date::month_name(mon), year))
        );

        let mut day_names: Vec<&str> = vec!["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
        if opts.week_start == Weekday::Mon {
            day_names.rotate_left(1);
        }
        for name in &day_names {
            print!("  {} ", name);
        }
        println!();

        //
        // 6 rows of 7 cells. Available days show green, conflicted slots
        // turn the cell yellow, everything else is grey.
        //
        for week in grid.chunks(7) {
            for day in week {
                let conflicted = day.slots.iter().any(|v| v.has_conflicts());
                let color = color_for_day(day.is_available, conflicted);
                let marker = if day.is_today { '*' } else { ' ' };

                if day.is_current_month {
                    print!("{}{:>3}{}{} ", color, day.date.day(), marker, RESET);
                } else {
                    print!("{}{:>3} {} ", GREY, day.date.day(), RESET);
                }
            }
            println!();
        }
        println!();

        //
        // Optional: slot times of each available day
        //
        if *slots {
            let mut printed = false;
            for day in grid.iter().filter(|d| d.is_available) {
                let times: Vec<String> = day
                    .slots
                    .iter()
                    .filter(|v| v.slot.available)
                    .map(|v| {
                        if v.has_conflicts() {
                            format!("{}(!)", v.slot.time_str())
                        } else {
                            v.slot.time_str()
                        }
                    })
                    .collect();

                println!("{}: {}", day.date, times.join(" "));
                printed = true;
            }

            if !printed {
                warning("No available days in this month.");
            }
        }
    }

    Ok(())
}
