use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logview::LogLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if *print {
            LogLogic::print_log(cfg)?;
        }
    }
    Ok(())
}
