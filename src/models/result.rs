use super::interval::CalculatedInterval;
use serde::Serialize;

/// Full partition of a shift, as produced by the allocator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    pub total_duration_minutes: i64,
    pub working_duration_minutes: i64,
    /// Time allotted to each job.
    pub interval_minutes: i64,
    pub intervals: Vec<CalculatedInterval>,
    pub calculated_end_time: String,
    pub original_end_time: String,
}

impl CalculationResult {
    /// True when rounding moved the end of the shift.
    pub fn end_time_changed(&self) -> bool {
        self.calculated_end_time != self.original_end_time
    }

    /// Total minutes assigned to `job_id` across its interval(s).
    pub fn minutes_for_job(&self, job_id: &str) -> i64 {
        self.intervals
            .iter()
            .filter(|i| i.job_id() == Some(job_id))
            .map(|i| i.duration_minutes)
            .sum()
    }

    pub fn break_count(&self) -> usize {
        self.intervals.iter().filter(|i| i.is_break()).count()
    }
}
