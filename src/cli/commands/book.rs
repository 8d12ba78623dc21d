use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::booking::BookLogic;
use crate::errors::{AppError, AppResult};
use crate::store::{Store, log};
use crate::ui::messages::{conflict, success};
use crate::utils::date;
use crate::utils::time::parse_required_time;

/// Book a lesson.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Book {
        date: date_str,
        time: time_str,
        student,
        subject,
        duration,
        strict,
        past,
    } = cmd
    {
        //
        // 1. Parse date and time (both mandatory)
        //
        let d = date::parse_date(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;
        let t = parse_required_time(time_str)?;

        //
        // 2. Lesson length: flag or config default
        //
        let duration_min = duration.unwrap_or(cfg.default_duration_min);

        //
        // 3. Open the store and run the booking logic
        //
        let mut store = Store::open(&cfg.data_file)?;

        let outcome = BookLogic::apply(
            &mut store,
            cfg,
            d,
            t,
            duration_min,
            student.clone(),
            subject.clone(),
            *strict,
            *past,
            chrono::Local::now().naive_local(),
        )?;

        //
        // 4. Report: warnings are advisory unless strict mode refused above
        //
        if cfg.show_conflict_warnings {
            for c in &outcome.conflicts {
                conflict(c.kind.as_str(), &c.detail);
            }
        }

        let appt = &outcome.appointment;
        success(format!(
            "Appointment #{} booked: {} {} ({} min) for {} / {}",
            appt.id,
            appt.date_str(),
            appt.time_str(),
            appt.duration_min,
            appt.student,
            appt.subject
        ));

        let _ = log::tclog(
            &cfg.data_file,
            "book",
            &format!("#{}", appt.id),
            &format!(
                "{} {} {} ({})",
                appt.date_str(),
                appt.time_str(),
                appt.student,
                appt.subject
            ),
        );
    }

    Ok(())
}
