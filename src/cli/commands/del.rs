use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::booking::DeleteLogic;
use crate::errors::AppResult;
use crate::store::{Store, log};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        //
        // Confirmation prompt
        //
        if !*yes
            && !ask_confirmation(&format!(
                "Delete appointment #{}? This action is irreversible.",
                id
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion (pending-only)
        //
        let mut store = Store::open(&cfg.data_file)?;
        let appt = DeleteLogic::apply(&mut store, *id)?;

        success(format!(
            "Appointment #{} ({} {}, {}) has been deleted.",
            appt.id,
            appt.date_str(),
            appt.time_str(),
            appt.student
        ));

        let _ = log::tclog(
            &cfg.data_file,
            "del",
            &format!("#{}", appt.id),
            &format!("{} {} {}", appt.date_str(), appt.time_str(), appt.student),
        );
    }

    Ok(())
}
