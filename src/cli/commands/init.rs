use crate::config::Config;
use crate::errors::AppResult;
use crate::store::log;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the JSON data file (empty slot/appointment lists)
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.data {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let mut cfg = Config::load();
    if let Some(custom) = &cli.data {
        cfg.data_file = custom.clone();
    }

    println!("⚙️  Initializing tutorcal…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Data file  : {}", &cfg.data_file);

    // Audit log (non-blocking)
    if let Err(e) = log::tclog(
        &cfg.data_file,
        "init",
        "Data file initialized",
        &format!("Data file initialized at {}", &cfg.data_file),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 tutorcal initialization completed!");
    Ok(())
}
