use serde::{Deserialize, Serialize};

/// Fixed length of the lunch break, in minutes.
pub const BREAK_MINUTES: i64 = 30;

/// Shift parameters as entered by the user.
///
/// `end` numerically earlier than `start` marks an overnight shift.
/// `lunch_start` is only read when `lunch_break` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftConfig {
    pub start: Option<String>,
    pub end: Option<String>,
    pub lunch_break: bool,
    pub lunch_start: String,
}

impl ShiftConfig {
    pub fn new(start: &str, end: &str, lunch_break: bool, lunch_start: &str) -> Self {
        Self {
            start: Some(start.to_string()),
            end: Some(end.to_string()),
            lunch_break,
            lunch_start: lunch_start.to_string(),
        }
    }

    pub fn break_minutes(&self) -> i64 {
        if self.lunch_break { BREAK_MINUTES } else { 0 }
    }
}
