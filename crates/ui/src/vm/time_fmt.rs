use chrono::{DateTime, Utc};

/// Header date format, e.g. "Aug 01, 2025".
#[must_use]
pub fn format_today(now: DateTime<Utc>) -> String {
    now.format("%b %d, %Y").to_string()
}
