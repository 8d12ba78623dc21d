//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn mins2readable(mins: i64, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;
    let sign = if mins < 0 { "-" } else { "" };

    if short {
        // es: 01:30
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // es: 01h 30m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Human-readable label and ANSI color for an appointment status code.
pub fn describe_status(code: &str) -> (String, &'static str) {
    match code.to_lowercase().as_str() {
        "pending" => ("Pending".into(), "\x1b[33m"),
        "confirmed" => ("Confirmed".into(), "\x1b[32m"),
        "completed" => ("Completed".into(), "\x1b[36m"),
        "cancelled" => ("Cancelled".into(), "\x1b[90m"),
        other => (other.to_string(), "\x1b[0m"),
    }
}

pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("{:.2}", p),
        None => "--".to_string(),
    }
}
