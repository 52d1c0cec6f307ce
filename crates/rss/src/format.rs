//! Text formats for dates and durations

use chrono::{DateTime, Utc};

/// Formats a timestamp the way RSS readers expect: `Mon, 01 Jan 2024 12:00:00 GMT`
pub fn format_rfc822(date: &DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Formats a duration in seconds as `H:MM:SS`, `M:SS` or `S`
///
/// Only the leading segment is unpadded. Fractional seconds are dropped,
/// never rounded. Negative or non-finite input formats as `0`.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0".to_string();
    }

    let total = seconds.floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}:{:02}", minutes, secs)
    } else {
        secs.to_string()
    }
}
