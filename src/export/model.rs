// src/export/model.rs

use crate::models::{CalculatedInterval, CalculationResult};
use serde::Serialize;

/// Flat row describing one interval, shared by CSV and JSON output.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct IntervalExport {
    pub position: usize,
    #[serde(rename = "type")]
    pub kind: String,
    pub job_id: String,
    pub name: String,
    pub color: String,
    pub start: String,
    pub end: String,
    pub duration_minutes: i64,
}

impl IntervalExport {
    pub fn from_interval(position: usize, interval: &CalculatedInterval) -> Self {
        Self {
            position,
            kind: interval.kind_str().to_string(),
            job_id: interval.job_id().unwrap_or_default().to_string(),
            name: interval.label().to_string(),
            color: interval.color().map(|c| c.to_string()).unwrap_or_default(),
            start: interval.start_time(),
            end: interval.end_time(),
            duration_minutes: interval.duration_minutes,
        }
    }
}

/// Whole result in export form: summary fields plus the interval rows.
#[derive(Serialize, Clone, Debug)]
pub struct ResultExport {
    pub generated_at: String,
    pub total_duration_minutes: i64,
    pub working_duration_minutes: i64,
    pub interval_minutes: i64,
    pub calculated_end_time: String,
    pub original_end_time: String,
    pub intervals: Vec<IntervalExport>,
}

impl ResultExport {
    pub fn from_result(result: &CalculationResult) -> Self {
        Self {
            generated_at: chrono::Local::now().to_rfc3339(),
            total_duration_minutes: result.total_duration_minutes,
            working_duration_minutes: result.working_duration_minutes,
            interval_minutes: result.interval_minutes,
            calculated_end_time: result.calculated_end_time.clone(),
            original_end_time: result.original_end_time.clone(),
            intervals: intervals_to_rows(result),
        }
    }
}

pub(crate) fn intervals_to_rows(result: &CalculationResult) -> Vec<IntervalExport> {
    result
        .intervals
        .iter()
        .enumerate()
        .map(|(i, iv)| IntervalExport::from_interval(i + 1, iv))
        .collect()
}
