//! Date display helpers

use std::fmt::{Display, Write};

use chrono::{DateTime, Local, TimeZone, Utc};

const FALLBACK_FORMAT: &str = "%Y-%m-%d";

/// Format `created_at` in the browser's local time zone
pub fn format_created_at(created_at: &DateTime<Utc>, format: &str) -> String {
    format_in(created_at, &Local, format)
}

/// Format in `tz`. An invalid format string falls back to `%Y-%m-%d`.
pub fn format_in<Tz>(at: &DateTime<Utc>, tz: &Tz, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = at.with_timezone(tz);
    let mut out = String::new();
    if write!(out, "{}", local.format(format)).is_ok() {
        return out;
    }
    log::warn!("Invalid date format {:?}, using {}", format, FALLBACK_FORMAT);
    local.format(FALLBACK_FORMAT).to_string()
}
