use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::booking::StatusLogic;
use crate::errors::{AppError, AppResult};
use crate::models::AppointmentStatus;
use crate::store::{Store, log};
use crate::ui::messages::success;
use crate::utils::formatting::describe_status;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { id, set } = cmd {
        let new_status = AppointmentStatus::from_code(set)
            .ok_or_else(|| AppError::InvalidStatus(set.to_string()))?;

        let mut store = Store::open(&cfg.data_file)?;
        StatusLogic::apply(&mut store, *id, new_status)?;

        let (label, color) = describe_status(new_status.as_str());
        success(format!(
            "Appointment #{} is now {}{}\x1b[0m.",
            id, color, label
        ));

        let _ = log::tclog(
            &cfg.data_file,
            "status",
            &format!("#{}", id),
            &format!("status set to {}", new_status.as_str()),
        );
    }

    Ok(())
}
