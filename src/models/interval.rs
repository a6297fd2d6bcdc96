use super::job::JobColor;
use crate::utils::time::minutes_to_time;
use serde::Serialize;

/// Label carried by every break interval.
pub const BREAK_LABEL: &str = "Lunch break";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum IntervalKind {
    Job {
        job_id: String,
        job_name: String,
        color: JobColor,
    },
    Break {
        label: String,
    },
}

/// One contiguous piece of the computed shift.
///
/// Minutes count from the midnight before the shift start, so an overnight
/// shift produces values above 1440.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculatedInterval {
    #[serde(flatten)]
    pub kind: IntervalKind,
    pub start_minutes: i64,
    pub end_minutes: i64,
    pub duration_minutes: i64,
}

impl CalculatedInterval {
    pub fn job(
        job_id: &str,
        job_name: &str,
        color: JobColor,
        start_minutes: i64,
        end_minutes: i64,
    ) -> Self {
        Self {
            kind: IntervalKind::Job {
                job_id: job_id.to_string(),
                job_name: job_name.to_string(),
                color,
            },
            start_minutes,
            end_minutes,
            duration_minutes: end_minutes - start_minutes,
        }
    }

    pub fn lunch(start_minutes: i64, duration_minutes: i64) -> Self {
        Self {
            kind: IntervalKind::Break {
                label: BREAK_LABEL.to_string(),
            },
            start_minutes,
            end_minutes: start_minutes + duration_minutes,
            duration_minutes,
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self.kind, IntervalKind::Break { .. })
    }

    pub fn job_id(&self) -> Option<&str> {
        match &self.kind {
            IntervalKind::Job { job_id, .. } => Some(job_id),
            IntervalKind::Break { .. } => None,
        }
    }

    pub fn color(&self) -> Option<JobColor> {
        match &self.kind {
            IntervalKind::Job { color, .. } => Some(*color),
            IntervalKind::Break { .. } => None,
        }
    }

    /// Job name or break label.
    pub fn label(&self) -> &str {
        match &self.kind {
            IntervalKind::Job { job_name, .. } => job_name,
            IntervalKind::Break { label } => label,
        }
    }

    pub fn kind_str(&self) -> &'static str {
        match self.kind {
            IntervalKind::Job { .. } => "job",
            IntervalKind::Break { .. } => "break",
        }
    }

    pub fn start_time(&self) -> String {
        minutes_to_time(self.start_minutes as f64)
    }

    pub fn end_time(&self) -> String {
        minutes_to_time(self.end_minutes as f64)
    }
}
