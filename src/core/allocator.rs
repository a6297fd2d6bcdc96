//! Splits a shift evenly among jobs and places the lunch break.

use crate::errors::AppResult;
use crate::models::{BREAK_MINUTES, CalculatedInterval, CalculationResult, Job, ShiftConfig};
use crate::utils::time::{MINUTES_PER_DAY, minutes_to_time, time_to_minutes};

/// Computes the interval partition of a shift.
///
/// Returns `Ok(None)` when there is nothing to compute: start or end missing,
/// no jobs, or no working time left once the break is removed. Malformed
/// clock strings are reported as `AppError::InvalidTime`.
pub fn calculate_intervals(
    shift: &ShiftConfig,
    jobs: &[Job],
) -> AppResult<Option<CalculationResult>> {
    let (Some(start), Some(end)) = (non_blank(&shift.start), non_blank(&shift.end)) else {
        return Ok(None);
    };
    if jobs.is_empty() {
        return Ok(None);
    }

    let start_mins = time_to_minutes(start)?;
    let mut end_mins = time_to_minutes(end)?;

    // overnight shift
    if end_mins < start_mins {
        end_mins += MINUTES_PER_DAY;
    }

    let lunch_mins = shift.break_minutes();
    let working = end_mins - start_mins - lunch_mins;
    if working <= 0 {
        return Ok(None);
    }

    let job_count = jobs.len() as i64;
    let per_job = round_div(working, job_count);
    let actual_working = per_job * job_count;
    let actual_total = actual_working + lunch_mins;
    let final_end = start_mins + actual_total;

    let lunch_start = if shift.lunch_break {
        Some(time_to_minutes(&shift.lunch_start)?)
    } else {
        None
    };

    let intervals = walk(start_mins, per_job, jobs, lunch_start);

    Ok(Some(CalculationResult {
        total_duration_minutes: actual_total,
        working_duration_minutes: actual_working,
        interval_minutes: per_job,
        intervals,
        calculated_end_time: minutes_to_time(final_end as f64),
        original_end_time: end.to_string(),
    }))
}

/// Emits job segments from `start`, inserting the break (if any) where it
/// falls. `lunch_start` is the raw clock value, not shifted for overnight
/// shifts.
fn walk(
    start: i64,
    per_job: i64,
    jobs: &[Job],
    lunch_start: Option<i64>,
) -> Vec<CalculatedInterval> {
    let lunch_mins = BREAK_MINUTES;
    let mut lunch_placed = lunch_start.is_none();
    let lunch_start = lunch_start.unwrap_or(0);

    let mut out = Vec::with_capacity(jobs.len() + 2);
    let mut current = start;
    let mut job_index = 0;

    while job_index < jobs.len() || !lunch_placed {
        if !lunch_placed && current >= lunch_start {
            out.push(CalculatedInterval::lunch(current, lunch_mins));
            current += lunch_mins;
            lunch_placed = true;
            continue;
        }

        if job_index < jobs.len() {
            let job = &jobs[job_index];
            let name = job.display_name(job_index);
            let job_end = current + per_job;

            if !lunch_placed && current < lunch_start && lunch_start < job_end {
                let before = lunch_start - current;
                let after = per_job - before;
                let resume = lunch_start + lunch_mins;

                out.push(CalculatedInterval::job(
                    &job.id,
                    &name,
                    job.color,
                    current,
                    lunch_start,
                ));
                out.push(CalculatedInterval::lunch(lunch_start, lunch_mins));
                out.push(CalculatedInterval::job(
                    &job.id,
                    &name,
                    job.color,
                    resume,
                    resume + after,
                ));

                current = resume + after;
                lunch_placed = true;
            } else {
                out.push(CalculatedInterval::job(
                    &job.id, &name, job.color, current, job_end,
                ));
                current = job_end;
            }
            job_index += 1;
        } else {
            // jobs exhausted before the break start was reached
            out.push(CalculatedInterval::lunch(current, lunch_mins));
            current += lunch_mins;
            lunch_placed = true;
        }
    }

    out
}

/// `num / den` rounded to the nearest integer, halves away from zero.
/// `den` must be positive.
fn round_div(num: i64, den: i64) -> i64 {
    if num >= 0 {
        (2 * num + den) / (2 * den)
    } else {
        -((-2 * num + den) / (2 * den))
    }
}

fn non_blank(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_div_ties_away_from_zero() {
        assert_eq!(round_div(180, 4), 45);
        assert_eq!(round_div(5, 2), 3);
        assert_eq!(round_div(7, 3), 2);
        assert_eq!(round_div(8, 3), 3);
        assert_eq!(round_div(1, 3), 0);
        assert_eq!(round_div(-5, 2), -3);
    }

    #[test]
    fn blank_times_count_as_missing() {
        assert_eq!(non_blank(&Some("  ".into())), None);
        assert_eq!(non_blank(&None), None);
        assert_eq!(non_blank(&Some("06:00".into())), Some("06:00"));
    }
}
