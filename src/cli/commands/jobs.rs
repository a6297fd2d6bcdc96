use crate::config::Config;
use crate::core::JobList;
use crate::errors::AppResult;
use crate::ui::render::render_jobs;

/// Handle the `jobs` command: print the job list from the configuration.
pub fn handle(cfg: &Config, color: bool) -> AppResult<()> {
    let jobs = JobList::from_entries(cfg.jobs.iter().map(|j| (j.name.as_str(), j.color)))?;

    print!("{}", render_jobs(&jobs, color, &cfg.separator_char));
    Ok(())
}
