use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::conflict::{Candidate, detect_conflicts};
use crate::errors::{AppError, AppResult};
use crate::models::rule::default_rules;
use crate::store::Store;
use crate::ui::messages::{conflict, success};
use crate::utils::date;
use crate::utils::time::{format_time_range, parse_required_time};

/// Conflict-check a candidate booking without saving anything.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check {
        date: date_str,
        time: time_str,
        duration,
        buffer,
        max_capacity,
        disable,
    } = cmd
    {
        let d = date::parse_date(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;
        let t = parse_required_time(time_str)?;
        let duration_min = duration.unwrap_or(cfg.default_duration_min);

        //
        // Rule set: config defaults, then CLI overrides
        //
        let mut rules = default_rules(
            buffer.unwrap_or(cfg.buffer_min),
            max_capacity.unwrap_or(cfg.max_capacity),
        );

        for name in disable {
            let found = rules
                .iter_mut()
                .find(|r| r.kind.as_str().eq_ignore_ascii_case(name));
            match found {
                Some(rule) => rule.enabled = false,
                None => {
                    return Err(AppError::Other(format!("unknown conflict rule: {name}")));
                }
            }
        }

        //
        // Run the detector
        //
        let store = Store::open(&cfg.data_file)?;
        let candidate = Candidate::new(d, t, duration_min);
        let conflicts = detect_conflicts(&candidate, &store.data.appointments, &rules);

        println!(
            "Candidate: {} {} ({} min)\n",
            d,
            format_time_range(t, duration_min),
            duration_min
        );

        if conflicts.is_empty() {
            success("No conflicts detected.");
        } else {
            for c in &conflicts {
                conflict(c.kind.as_str(), &c.detail);
            }
            println!("\n{} conflict(s)", conflicts.len());
        }
    }

    Ok(())
}
