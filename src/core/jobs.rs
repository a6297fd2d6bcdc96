//! Ordered, bounded list of jobs with automatic colour assignment.

use crate::errors::{AppError, AppResult};
use crate::models::{Job, JobColor};
use uuid::Uuid;

/// Upper bound on the number of jobs a shift can be split into.
pub const MAX_JOBS: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobList {
    jobs: Vec<Job>,
}

impl JobList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from `(name, color)` pairs. A missing colour is
    /// replaced by the first one not yet in use.
    pub fn from_entries<'a, I>(entries: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (&'a str, Option<JobColor>)>,
    {
        let mut list = Self::new();
        for (name, color) in entries {
            match color {
                Some(c) => list.add_with_color(name, c)?,
                None => list.add(name)?,
            };
        }
        Ok(list)
    }

    pub fn as_slice(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.jobs.len() >= MAX_JOBS
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.jobs.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// First palette colour no job uses yet, or the first colour when all
    /// are taken.
    pub fn next_color(&self) -> JobColor {
        JobColor::ALL
            .iter()
            .copied()
            .find(|c| !self.jobs.iter().any(|j| j.color == *c))
            .unwrap_or(JobColor::ALL[0])
    }

    /// Appends a job with a fresh id and the next unused colour.
    pub fn add(&mut self, name: &str) -> AppResult<&Job> {
        let color = self.next_color();
        self.add_with_color(name, color)
    }

    pub fn add_with_color(&mut self, name: &str, color: JobColor) -> AppResult<&Job> {
        if self.is_full() {
            return Err(AppError::JobLimit(MAX_JOBS));
        }
        self.jobs
            .push(Job::new(Uuid::new_v4().to_string(), name, color));
        Ok(&self.jobs[self.jobs.len() - 1])
    }

    /// Removes a job. The last remaining job is kept.
    pub fn remove(&mut self, id: &str) -> AppResult<Job> {
        let pos = self.position(id)?;
        if self.jobs.len() <= 1 {
            return Err(AppError::LastJob);
        }
        Ok(self.jobs.remove(pos))
    }

    pub fn rename(&mut self, id: &str, name: &str) -> AppResult<()> {
        let pos = self.position(id)?;
        self.jobs[pos].name = name.to_string();
        Ok(())
    }

    pub fn recolor(&mut self, id: &str, color: JobColor) -> AppResult<()> {
        let pos = self.position(id)?;
        self.jobs[pos].color = color;
        Ok(())
    }

    fn position(&self, id: &str) -> AppResult<usize> {
        self.jobs
            .iter()
            .position(|j| j.id == id)
            .ok_or_else(|| AppError::JobNotFound(id.to_string()))
    }
}

impl<'a> IntoIterator for &'a JobList {
    type Item = &'a Job;
    type IntoIter = std::slice::Iter<'a, Job>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.iter()
    }
}
