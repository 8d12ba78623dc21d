/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Status color:
/// pending → yellow, confirmed → green, completed → cyan, cancelled → grey.
pub fn color_for_status(status: &str) -> &'static str {
    match status {
        "pending" => YELLOW,
        "confirmed" => GREEN,
        "completed" => CYAN,
        "cancelled" => GREY,
        _ => RESET,
    }
}

/// Grid cell color: available → green, conflicted → yellow, dead → grey.
pub fn color_for_day(available: bool, conflicted: bool) -> &'static str {
    if !available {
        GREY
    } else if conflicted {
        YELLOW
    } else {
        GREEN
    }
}

/// Returns GREY for empty-ish values ("" or "--"), RESET otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
