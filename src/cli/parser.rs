use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for tutorcal
/// CLI application to manage a tutor's bookable calendar
#[derive(Parser)]
#[command(
    name = "tutorcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "A tutoring calendar CLI: availability grids, conflict checks and appointment tracking",
    long_about = None
)]
pub struct Cli {
    /// Override data file path (useful for tests or custom data files)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data file and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print entries from the internal audit log")]
        print: bool,
    },

    /// Book a lesson (new appointments start as pending)
    Book {
        /// Date of the lesson (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        time: String,

        /// Student name
        #[arg(long, help = "Student booking the lesson")]
        student: String,

        /// Subject of the lesson
        #[arg(long, help = "Subject of the lesson")]
        subject: String,

        /// Lesson length in minutes (default from config)
        #[arg(long = "duration", help = "Lesson length in minutes")]
        duration: Option<i64>,

        /// Refuse the booking when any conflict is detected
        #[arg(long, help = "Refuse the booking when any conflict is detected")]
        strict: bool,

        /// Allow booking a date/time in the past (backfill)
        #[arg(long, help = "Allow booking in the past (backfill)")]
        past: bool,
    },

    /// Delete a pending appointment by id
    Del {
        /// Appointment id to delete
        id: u32,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Change an appointment's status
    Status {
        /// Appointment id
        id: u32,

        /// New status: pending, confirmed, completed, cancelled
        #[arg(long = "set", help = "New status (confirmed, completed, cancelled)")]
        set: String,
    },

    /// List appointments
    List {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM              → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD           → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY:YYYY            → year range
        /// - YYYY-MM:YYYY-MM      → month range
        /// - YYYY-MM-DD:YYYY-MM-DD→ day range
        ///
        /// Special value:
        /// - all                   → the entire archive
        ///
        /// If omitted, the default is the current month.
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)"
        )]
        period: Option<String>,

        /// Filter by status (pending, confirmed, completed, cancelled)
        #[arg(long, help = "Filter by appointment status")]
        status: Option<String>,

        /// Filter by student name (exact match)
        #[arg(long, help = "Filter by student name")]
        student: Option<String>,
    },

    /// Manage bookable slots
    Slots {
        /// Day to generate or list slots for (YYYY-MM-DD)
        date: String,

        /// Generate slots for the date from the working pattern
        #[arg(long, help = "Generate slots for the date")]
        generate: bool,

        /// First bookable hour (with --generate)
        #[arg(long = "from", default_value_t = 9, help = "First bookable hour")]
        from_hour: u32,

        /// First non-bookable hour (with --generate)
        #[arg(long = "to", default_value_t = 18, help = "First non-bookable hour")]
        to_hour: u32,

        /// Slot length in minutes (with --generate; default from config)
        #[arg(long = "len", help = "Slot length in minutes")]
        slot_len: Option<i64>,
    },

    /// Show the month availability grid
    Grid {
        /// Month to show (YYYY-MM); defaults to the current month
        #[arg(long, help = "Month to show (YYYY-MM)")]
        month: Option<String>,

        /// First selectable date (YYYY-MM-DD); defaults to today
        #[arg(long = "min", help = "First selectable date (YYYY-MM-DD)")]
        min_date: Option<String>,

        /// Last selectable date (YYYY-MM-DD)
        #[arg(long = "max", help = "Last selectable date (YYYY-MM-DD)")]
        max_date: Option<String>,

        /// Also list each available day's slot times
        #[arg(long, help = "Also list each available day's slot times")]
        slots: bool,
    },

    /// Check a candidate booking for conflicts without saving anything
    Check {
        /// Date of the candidate (YYYY-MM-DD)
        date: String,

        /// Start time of the candidate (HH:MM)
        time: String,

        /// Lesson length in minutes (default from config)
        #[arg(long = "duration", help = "Lesson length in minutes")]
        duration: Option<i64>,

        /// Override the adjacent-rule buffer in minutes
        #[arg(long, help = "Override the adjacent-rule buffer in minutes")]
        buffer: Option<i64>,

        /// Override the capacity-rule maximum
        #[arg(long = "capacity", help = "Override the capacity-rule maximum")]
        max_capacity: Option<usize>,

        /// Disable one or more rules (overlap, adjacent, double-booking, capacity)
        #[arg(
            long = "disable",
            value_delimiter = ',',
            help = "Disable rules (comma-separated: overlap,adjacent,double-booking,capacity)"
        )]
        disable: Vec<String>,
    },

    /// Create a backup copy of the data file
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup into a .zip archive
        #[arg(long)]
        compress: bool,
    },

    /// Export appointment data in various formats
    Export {
        /// Export format: csv, json, xlsx
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Date range to export.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year
        /// - YYYY-MM              → entire month
        /// - YYYY-MM-DD           → specific day
        ///
        /// Ranges (start:end) in the same format, plus the special value
        /// "all" for the entire archive. If omitted, everything is exported.
        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
