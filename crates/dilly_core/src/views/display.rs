//! Human-facing labels derived from stored dates and timestamps.

use crate::model::day::DATE_FORMAT;
use chrono::{DateTime, NaiveDate, TimeZone};

/// Describes how long ago `timestamp` was, relative to `now`.
///
/// `just now` under a minute, `Nm ago` under an hour, `Nh ago` under a day,
/// otherwise the wall-clock `HH:MM` in `now`'s timezone. Returns `None` for
/// timestamps that are not RFC 3339.
pub fn relative_time<Tz: TimeZone>(timestamp: &str, now: &DateTime<Tz>) -> Option<String>
where
    Tz::Offset: std::fmt::Display,
{
    let then = DateTime::parse_from_rfc3339(timestamp).ok()?;
    let minutes = now.clone().signed_duration_since(then).num_minutes();
    let hours = minutes / 60;

    Some(if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        then.with_timezone(&now.timezone()).format("%H:%M").to_string()
    })
}

/// `Today` for the current date, otherwise a short label like `Sat, Oct 17`.
///
/// Unparsable date strings are returned unchanged.
pub fn date_label(date_string: &str, today: NaiveDate) -> String {
    match NaiveDate::parse_from_str(date_string, DATE_FORMAT) {
        Ok(date) if date == today => "Today".to_string(),
        Ok(date) => date.format("%a, %b %-d").to_string(),
        Err(_) => date_string.to_string(),
    }
}
