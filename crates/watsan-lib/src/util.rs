//! Timestamp formatting utilities.

use chrono::{DateTime, Local};

/// Current local time as an en-US locale string, e.g.
/// `8/23/2026, 7:45:01 PM`.
#[must_use]
pub fn locale_timestamp() -> String {
    format_locale(Local::now())
}

fn format_locale(dt: DateTime<Local>) -> String {
    dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
