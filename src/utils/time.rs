//! Time utilities: HH:MM <-> minutes from midnight, current clock time.

use crate::errors::{AppError, AppResult};
use chrono::{Local, Timelike};
use regex::Regex;
use std::sync::LazyLock;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

// No range check on purpose: "25:90" is accepted and yields 1590.
static CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d{1,3}):(\d{1,2})(?::\d{1,2})?\s*$").unwrap());

/// Converts an `HH:MM` string to minutes from the start of the day.
///
/// A trailing `:SS` component is accepted and ignored.
pub fn time_to_minutes(t: &str) -> AppResult<i64> {
    let caps = CLOCK_RE
        .captures(t)
        .ok_or_else(|| AppError::InvalidTime(t.to_string()))?;

    let hours: i64 = caps[1]
        .parse()
        .map_err(|_| AppError::InvalidTime(t.to_string()))?;
    let minutes: i64 = caps[2]
        .parse()
        .map_err(|_| AppError::InvalidTime(t.to_string()))?;

    Ok(hours * 60 + minutes)
}

/// Converts minutes to an `HH:MM` string, wrapping hours modulo 24.
///
/// A sub-minute remainder is shown as seconds (`HH:MM:SS`).
pub fn minutes_to_time(total_minutes: f64) -> String {
    let total_seconds = (total_minutes * 60.0).round() as i64;
    let day_seconds = total_seconds.rem_euclid(MINUTES_PER_DAY * 60);

    let hours = day_seconds / 3600;
    let minutes = (day_seconds % 3600) / 60;
    let seconds = day_seconds % 60;

    if seconds > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", hours, minutes)
    }
}

/// Current local time as `HH:MM`, used for `--start now`.
pub fn now_hhmm() -> String {
    let now = Local::now().time();
    format!("{:02}:{:02}", now.hour(), now.minute())
}

/// Resolves the `now` keyword, passing any other value through.
pub fn resolve_clock(input: &str) -> String {
    if input.trim().eq_ignore_ascii_case("now") {
        now_hhmm()
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_clock_times() {
        assert_eq!(time_to_minutes("06:30").unwrap(), 390);
        assert_eq!(time_to_minutes("0:05").unwrap(), 5);
        assert_eq!(time_to_minutes("23:59").unwrap(), 1439);
        assert_eq!(time_to_minutes("08:00:45").unwrap(), 480);
    }

    #[test]
    fn no_range_validation() {
        assert_eq!(time_to_minutes("25:90").unwrap(), 1590);
    }

    #[test]
    fn malformed_input_is_rejected() {
        for bad in ["", "0800", "ab:cd", "08:", "-1:00", "8h30"] {
            assert!(
                matches!(time_to_minutes(bad), Err(AppError::InvalidTime(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn formats_whole_minutes() {
        assert_eq!(minutes_to_time(390.0), "06:30");
        assert_eq!(minutes_to_time(0.0), "00:00");
        assert_eq!(minutes_to_time(1440.0), "00:00");
        assert_eq!(minutes_to_time(1560.0), "02:00");
    }

    #[test]
    fn wraps_negative_minutes() {
        assert_eq!(minutes_to_time(-30.0), "23:30");
    }

    #[test]
    fn fractional_minutes_render_seconds() {
        assert_eq!(minutes_to_time(390.5), "06:30:30");
        assert_eq!(minutes_to_time(60.25), "01:00:15");
        // rounds to the next whole minute instead of printing ":60"
        assert_eq!(minutes_to_time(59.9999), "01:00");
    }

    #[test]
    fn now_keyword_is_resolved() {
        assert_eq!(resolve_clock("07:15"), "07:15");
        let now = resolve_clock("NOW");
        assert!(time_to_minutes(&now).is_ok());
    }
}
