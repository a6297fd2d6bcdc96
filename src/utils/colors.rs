/// ANSI color helper utilities for terminal output.
use crate::models::{CalculatedInterval, IntervalKind};
use ansi_term::{Colour, Style};

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";
pub const YELLOW: &str = "\x1b[33m";

/// Style used for the label of an interval: the job colour, or bold
/// yellow for the lunch break.
pub fn style_for_interval(interval: &CalculatedInterval) -> Style {
    match &interval.kind {
        IntervalKind::Job { color, .. } => color.terminal_colour().normal(),
        IntervalKind::Break { .. } => Colour::Yellow.bold(),
    }
}

/// Paints `text` with `style` when colours are enabled.
pub fn paint(text: &str, style: Style, enabled: bool) -> String {
    if enabled {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Greys out zero-length values such as "0 min".
pub fn colorize_optional(value: &str, enabled: bool) -> String {
    if enabled && (value.trim().is_empty() || value.trim() == "0 min") {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
