//! Relative "time ago" labels for conversion history.
//!
//! Bounded to short sessions: there is no day or month granularity, so a
//! three-day-old entry reads "72 hours ago".

use chrono::{DateTime, Utc};

/// Label for a record created `minutes` ago.
pub fn relative_time(minutes: i64) -> String {
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes == 1 {
        return "1 minute ago".to_string();
    }
    if minutes < 60 {
        return format!("{} minutes ago", minutes);
    }
    let hours = minutes / 60;
    if hours == 1 {
        "1 hour ago".to_string()
    } else {
        format!("{} hours ago", hours)
    }
}

/// Label for `then` as seen from `now`. Elapsed time is floored to whole minutes.
pub fn relative_since(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = now.signed_duration_since(then).num_milliseconds().div_euclid(60_000);
    relative_time(minutes)
}
