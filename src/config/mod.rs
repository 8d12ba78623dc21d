use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the JSON data file (slots + appointments).
    pub data_file: String,
    /// Default lesson length in minutes.
    #[serde(default = "default_duration")]
    pub default_duration_min: i64,
    /// Minimum gap between two bookings (adjacent rule).
    #[serde(default = "default_buffer")]
    pub buffer_min: i64,
    /// Max bookings allowed at the same date+time (capacity rule).
    #[serde(default = "default_capacity")]
    pub max_capacity: usize,
    /// Comma-separated working weekdays ("mon,tue,..."); empty = every day.
    #[serde(default)]
    pub working_days: String,
    /// First day of the grid: "sun" or "mon".
    #[serde(default = "default_week_start")]
    pub week_start: String,
    /// Default hourly rate applied when a slot carries no price.
    #[serde(default = "default_rate")]
    pub hourly_rate: f64,
    /// Print conflict warnings when booking (detection always runs).
    #[serde(default = "default_true")]
    pub show_conflict_warnings: bool,
    /// Refuse bookings that have conflicts instead of just warning.
    #[serde(default)]
    pub block_on_conflict: bool,
}

fn default_duration() -> i64 {
    60
}
fn default_buffer() -> i64 {
    15
}
fn default_capacity() -> usize {
    1
}
fn default_week_start() -> String {
    "sun".to_string()
}
fn default_rate() -> f64 {
    30.0
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::data_file().to_string_lossy().to_string(),
            default_duration_min: default_duration(),
            buffer_min: default_buffer(),
            max_capacity: default_capacity(),
            working_days: String::new(),
            week_start: default_week_start(),
            hourly_rate: default_rate(),
            show_conflict_warnings: true,
            block_on_conflict: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tutorcal")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".tutorcal")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tutorcal.conf")
    }

    /// Return the full path of the JSON data file
    pub fn data_file() -> PathBuf {
        Self::config_dir().join("tutorcal.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and data files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Data file name: user provided or default
        let data_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::data_file()
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create an empty data file if not exists
        if !data_path.exists() {
            fs::write(&data_path, "{\"slots\":[],\"appointments\":[]}\n")?;
        }

        println!("✅ Data file:   {:?}", data_path);

        Ok(())
    }
}
