use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::slots::{format_day_times, generate_day_slots, group_slots_by_date};
use crate::errors::{AppError, AppResult};
use crate::models::WeekPattern;
use crate::store::{Store, log};
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use crate::utils::formatting::mins2readable;

/// Generate or list bookable slots for a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Slots {
        date: date_str,
        generate,
        from_hour,
        to_hour,
        slot_len,
    } = cmd
    {
        let d = date::parse_date(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

        let mut store = Store::open(&cfg.data_file)?;

        if *generate {
            //
            // Generate slots from the working pattern
            //
            let pattern = WeekPattern::parse(&cfg.working_days)?;
            let len = slot_len.unwrap_or(cfg.default_duration_min);

            let slots = generate_day_slots(d, &pattern, *from_hour, *to_hour, len, None);

            if slots.is_empty() {
                warning(format!(
                    "{} is not a working day for the configured pattern; no slots generated.",
                    d
                ));
                return Ok(());
            }

            let count = slots.len();
            store.replace_slots_on(d, slots);
            store.save()?;

            success(format!(
                "{} slot(s) of {} generated for {}.",
                count,
                mins2readable(len, false),
                d
            ));

            let _ = log::tclog(
                &cfg.data_file,
                "slots",
                &d.format("%Y-%m-%d").to_string(),
                &format!("{} slot(s) generated", count),
            );
        } else {
            //
            // List the day's slots
            //
            let day_slots = store.slots_on(d);

            if day_slots.is_empty() {
                info(format!("No slots stored for {}.", d));
                return Ok(());
            }

            let owned: Vec<_> = day_slots.into_iter().cloned().collect();
            let grouped = group_slots_by_date(&owned);

            for (day, slots) in grouped {
                println!("{}:", day);
                println!("  open:   {}", format_day_times(&slots, true));

                let taken: Vec<String> = slots
                    .iter()
                    .filter(|s| !s.available)
                    .map(|s| match &s.booked_by {
                        Some(name) => format!("{} ({})", s.time_str(), name),
                        None => s.time_str(),
                    })
                    .collect();

                if !taken.is_empty() {
                    println!("  booked: {}", taken.join(" "));
                }
            }
        }
    }

    Ok(())
}
