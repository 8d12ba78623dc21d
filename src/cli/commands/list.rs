use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Appointment;
use crate::store::Store;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_status, colorize_optional};
use crate::utils::date;
use crate::utils::formatting::{format_price, mins2readable};
use crate::utils::table::Table;
use chrono::NaiveDate;

/// List appointments, current month by default.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        status,
        student,
    } = cmd
    {
        let store = Store::open(&cfg.data_file)?;

        //
        // 1. Resolve the period filter
        //
        let dates: Option<Vec<NaiveDate>> = match period.as_deref() {
            Some("all") => None,
            Some(p) => Some(expand_period(p)?),
            None => {
                let t = date::today();
                Some(date::all_days_of_month(
                    chrono::Datelike::year(&t),
                    chrono::Datelike::month(&t),
                ))
            }
        };

        //
        // 2. Select and order
        //
        let mut selected: Vec<&Appointment> = store
            .data
            .appointments
            .iter()
            .filter(|a| dates.as_ref().map(|ds| ds.contains(&a.date)).unwrap_or(true))
            .filter(|a| {
                status
                    .as_deref()
                    .map(|s| a.status.as_str().eq_ignore_ascii_case(s))
                    .unwrap_or(true)
            })
            .filter(|a| {
                student
                    .as_deref()
                    .map(|s| a.student.eq_ignore_ascii_case(s))
                    .unwrap_or(true)
            })
            .collect();

        selected.sort_by_key(|a| (a.date, a.time, a.id));

        if selected.is_empty() {
            info("No appointments found for the selected filters.");
            return Ok(());
        }

        //
        // 3. Render
        //
        let rows: Vec<Vec<String>> = selected
            .iter()
            .map(|a| {
                let color = color_for_status(a.status.as_str());
                vec![
                    format!("#{}", a.id),
                    a.date_str(),
                    a.time_str(),
                    mins2readable(a.duration_min, true),
                    a.student.clone(),
                    a.subject.clone(),
                    format!("{}{}{}", color, a.status.as_str(), RESET),
                    colorize_optional(&format_price(a.price)),
                ]
            })
            .collect();

        let table = Table::auto(
            &[
                "id", "date", "time", "min", "student", "subject", "status", "price",
            ],
            rows,
        );

        println!("{}", table.render());
        println!("{} appointment(s)", selected.len());
    }

    Ok(())
}

fn expand_period(p: &str) -> AppResult<Vec<NaiveDate>> {
    let result = if let Some((start, end)) = p.split_once(':') {
        date::generate_range(start.trim(), end.trim())
    } else {
        date::generate_from_period(p)
    };

    result.map_err(crate::errors::AppError::InvalidDate)
}
