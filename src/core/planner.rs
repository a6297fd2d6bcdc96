//! Stateful front-end binding: holds the current inputs and the latest
//! allocation, recomputed from scratch after every change.

use crate::config::Config;
use crate::core::allocator::calculate_intervals;
use crate::core::jobs::JobList;
use crate::errors::AppResult;
use crate::models::{CalculationResult, JobColor, ShiftConfig};

#[derive(Debug, Clone)]
pub struct Planner {
    shift: ShiftConfig,
    jobs: JobList,
    result: Option<CalculationResult>,
}

impl Planner {
    pub fn new(shift: ShiftConfig, jobs: JobList) -> AppResult<Self> {
        let mut planner = Self {
            shift,
            jobs,
            result: None,
        };
        planner.recompute()?;
        Ok(planner)
    }

    /// Planner seeded with the configured default values.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let shift = ShiftConfig::new(
            &cfg.shift_start,
            &cfg.shift_end,
            cfg.lunch_break,
            &cfg.lunch_start,
        );
        let jobs = JobList::from_entries(cfg.jobs.iter().map(|j| (j.name.as_str(), j.color)))?;
        Self::new(shift, jobs)
    }

    pub fn shift(&self) -> &ShiftConfig {
        &self.shift
    }

    pub fn jobs(&self) -> &JobList {
        &self.jobs
    }

    /// Latest result; `None` when the inputs are degenerate or invalid.
    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    pub fn set_start(&mut self, start: Option<String>) -> AppResult<()> {
        self.shift.start = start;
        self.recompute()
    }

    pub fn set_end(&mut self, end: Option<String>) -> AppResult<()> {
        self.shift.end = end;
        self.recompute()
    }

    pub fn set_lunch_break(&mut self, enabled: bool) -> AppResult<()> {
        self.shift.lunch_break = enabled;
        self.recompute()
    }

    pub fn set_lunch_start(&mut self, lunch_start: &str) -> AppResult<()> {
        self.shift.lunch_start = lunch_start.to_string();
        self.recompute()
    }

    /// Replaces the whole job list.
    pub fn set_jobs(&mut self, jobs: JobList) -> AppResult<()> {
        self.jobs = jobs;
        self.recompute()
    }

    /// Adds a job and returns its id.
    pub fn add_job(&mut self, name: &str) -> AppResult<String> {
        let id = self.jobs.add(name)?.id.clone();
        self.recompute()?;
        Ok(id)
    }

    pub fn remove_job(&mut self, id: &str) -> AppResult<()> {
        self.jobs.remove(id)?;
        self.recompute()
    }

    pub fn rename_job(&mut self, id: &str, name: &str) -> AppResult<()> {
        self.jobs.rename(id, name)?;
        self.recompute()
    }

    pub fn recolor_job(&mut self, id: &str, color: JobColor) -> AppResult<()> {
        self.jobs.recolor(id, color)?;
        self.recompute()
    }

    // The previous result is dropped before anything else so a failed
    // computation never leaves a stale one behind.
    fn recompute(&mut self) -> AppResult<()> {
        self.result = None;
        self.result = calculate_intervals(&self.shift, self.jobs.as_slice())?;
        Ok(())
    }
}
