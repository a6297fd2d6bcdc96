//! Text rendering of a computed shift.

use crate::core::JobList;
use crate::models::CalculationResult;
use crate::utils::colors::{RESET, YELLOW, colorize_optional, paint, style_for_interval};
use crate::utils::format_duration;
use crate::utils::formatting::{bold, italic};
use crate::utils::table::{Column, Table};

/// Summary block plus one table row per interval.
pub fn render_result(result: &CalculationResult, color: bool, separator: &str) -> String {
    let mut out = String::new();

    let label = |s: &str| if color { bold(s) } else { s.to_string() };

    out.push_str(&format!(
        "{} {}\n",
        label("Total:       "),
        format_duration(result.total_duration_minutes)
    ));
    out.push_str(&format!(
        "{} {}\n",
        label("Working time:"),
        format_duration(result.working_duration_minutes)
    ));
    out.push_str(&format!(
        "{} {}\n",
        label("Per job:     "),
        format_duration(result.interval_minutes)
    ));
    out.push_str(&format!(
        "{} {}\n",
        label("End time:    "),
        result.calculated_end_time
    ));

    if result.end_time_changed() {
        let notice = format!(
            "End time adjusted from {} to {} so that every job lasts exactly {} min.",
            result.original_end_time, result.calculated_end_time, result.interval_minutes
        );
        if color {
            out.push_str(&format!("{YELLOW}{}{RESET}\n", italic(&notice)));
        } else {
            out.push_str(&notice);
            out.push('\n');
        }
    }
    out.push('\n');

    let mut table = Table::new(vec![
        Column::right("#"),
        Column::left("Job"),
        Column::left("From"),
        Column::left("To"),
        Column::right("Duration"),
    ])
    .with_separator(separator);

    for (idx, interval) in result.intervals.iter().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            paint(interval.label(), style_for_interval(interval), color),
            interval.start_time(),
            interval.end_time(),
            colorize_optional(&format!("{} min", interval.duration_minutes), color),
        ]);
    }

    out.push_str(&table.render());
    out
}

/// Table of configured jobs with their fallback names and colours.
pub fn render_jobs(jobs: &JobList, color: bool, separator: &str) -> String {
    let mut table = Table::new(vec![
        Column::right("#"),
        Column::left("Job"),
        Column::left("Color"),
    ])
    .with_separator(separator);

    for (idx, job) in jobs.iter().enumerate() {
        let name = job.display_name(idx);
        let style = job.color.terminal_colour().normal();
        table.add_row(vec![
            (idx + 1).to_string(),
            paint(&name, style, color),
            job.color.to_string(),
        ]);
    }

    table.render()
}
