use crate::errors::{AppError, AppResult};
use ansi_term::Colour;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cosmetic tag attached to every job. Irrelevant to allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobColor {
    Indigo,
    Emerald,
    Rose,
    Sky,
    Violet,
    Orange,
}

impl JobColor {
    /// Palette order, also the order in which unused colors are handed out.
    pub const ALL: [JobColor; 6] = [
        JobColor::Indigo,
        JobColor::Emerald,
        JobColor::Rose,
        JobColor::Sky,
        JobColor::Violet,
        JobColor::Orange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobColor::Indigo => "indigo",
            JobColor::Emerald => "emerald",
            JobColor::Rose => "rose",
            JobColor::Sky => "sky",
            JobColor::Violet => "violet",
            JobColor::Orange => "orange",
        }
    }

    /// Terminal colour used when rendering the job.
    pub fn terminal_colour(&self) -> Colour {
        match self {
            JobColor::Indigo => Colour::Blue,
            JobColor::Emerald => Colour::Green,
            JobColor::Rose => Colour::Red,
            JobColor::Sky => Colour::Cyan,
            JobColor::Violet => Colour::Purple,
            JobColor::Orange => Colour::RGB(255, 153, 51),
        }
    }
}

impl FromStr for JobColor {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        JobColor::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for JobColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub name: String,
    pub color: JobColor,
}

impl Job {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: JobColor) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color,
        }
    }

    /// Name shown for the job at `index` (0-based): the stored name, or
    /// `Job <n>` when it is blank.
    pub fn display_name(&self, index: usize) -> String {
        let name = self.name.trim();
        if name.is_empty() {
            format!("Job {}", index + 1)
        } else {
            name.to_string()
        }
    }
}
