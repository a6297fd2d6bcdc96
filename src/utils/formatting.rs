//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Formats a duration in minutes into a human-readable string.
///
/// `90` → `"1 h 30 min"`, `45` → `"45 min"`, `120` → `"2 h"`, `0` → `"0 min"`.
pub fn format_duration(mins: i64) -> String {
    let h = mins / 60;
    let m = mins % 60;

    if h == 0 {
        return format!("{} min", m);
    }
    if m == 0 {
        return format!("{} h", h);
    }
    format!("{} h {} min", h, m)
}
