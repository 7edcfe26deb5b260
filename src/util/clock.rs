//! Wall-clock formatting for user-facing messages.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use chrono::{DateTime, FixedOffset, Utc};

/// America/Bogota: UTC-05:00 year-round, no daylight saving since 1993.
const BOGOTA_WEST_SECS: i32 = 5 * 3600;
const TWELVE_HOUR: &str = "%-I:%M:%S %p";

/// Format `now` as Bogota local time on a 12-hour clock, e.g. `3:07:09 PM`.
pub fn format_logout_time(now: DateTime<Utc>) -> String {
    match FixedOffset::west_opt(BOGOTA_WEST_SECS) {
        Some(offset) => now.with_timezone(&offset).format(TWELVE_HOUR).to_string(),
        None => now.format(TWELVE_HOUR).to_string(),
    }
}
