use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{JobList, Planner};
use crate::errors::AppResult;
use crate::export::logic::{ExportLogic, OutputOptions};
use crate::models::{JobColor, ShiftConfig};
use crate::ui::messages::warning;
use crate::utils::time::resolve_clock;

/// Handle the `calc` command
///
/// CLI options override the configured defaults; `--job` replaces the whole
/// configured job list.
pub fn handle(cmd: &Commands, cfg: &Config, color: bool) -> AppResult<()> {
    if let Commands::Calc {
        start,
        end,
        lunch,
        no_lunch,
        jobs,
        format,
        file,
        force,
    } = cmd
    {
        let shift = build_shift(cfg, start, end, lunch, *no_lunch);

        let job_list = if jobs.is_empty() {
            JobList::from_entries(cfg.jobs.iter().map(|j| (j.name.as_str(), j.color)))?
        } else {
            JobList::from_entries(jobs.iter().map(|j| parse_job_arg(j)))?
        };

        let planner = Planner::new(shift, job_list)?;

        let Some(result) = planner.result() else {
            warning("Nothing to split: check the shift times and the job list.");
            return Ok(());
        };

        let opts = OutputOptions {
            format: *format,
            file: file.clone(),
            force: *force,
            color,
            separator: cfg.separator_char.clone(),
        };
        ExportLogic::export(result, &opts)?;
    }

    Ok(())
}

fn build_shift(
    cfg: &Config,
    start: &Option<String>,
    end: &Option<String>,
    lunch: &Option<String>,
    no_lunch: bool,
) -> ShiftConfig {
    let start = start.as_deref().unwrap_or(&cfg.shift_start);
    let end = end.as_deref().unwrap_or(&cfg.shift_end);

    let (lunch_break, lunch_start) = match lunch {
        Some(l) => (true, l.as_str()),
        None => (cfg.lunch_break && !no_lunch, cfg.lunch_start.as_str()),
    };

    ShiftConfig::new(
        &resolve_clock(start),
        &resolve_clock(end),
        lunch_break,
        &resolve_clock(lunch_start),
    )
}

/// Splits `NAME:COLOR`. A suffix that is not a known colour stays part of
/// the name, so `225:037` is a plain name.
pub fn parse_job_arg(arg: &str) -> (&str, Option<JobColor>) {
    if let Some((name, suffix)) = arg.rsplit_once(':')
        && let Ok(color) = suffix.parse::<JobColor>()
    {
        return (name, Some(color));
    }
    (arg, None)
}
