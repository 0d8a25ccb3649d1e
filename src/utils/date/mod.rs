// Date utility functions

use chrono::{DateTime, Local};

/// Formats a target instant for display beneath the countdown,
/// e.g. "1 January 2030, 00:00".
pub fn format_target(target: DateTime<Local>) -> String {
    target.format("%-d %B %Y, %H:%M").to_string()
}
