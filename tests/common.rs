#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use shiftsplit::{Job, JobColor, ShiftConfig};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ssp() -> Command {
    cargo_bin_cmd!("shiftsplit")
}

/// Unique config path inside the system temp dir; any existing file is removed
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftsplit.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Temporary output file path inside tempdir, removed if present
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftsplit_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `n` jobs named J1..Jn with ids "1".."n"
pub fn jobs(n: usize) -> Vec<Job> {
    (0..n)
        .map(|i| {
            Job::new(
                (i + 1).to_string(),
                format!("J{}", i + 1),
                JobColor::ALL[i % JobColor::ALL.len()],
            )
        })
        .collect()
}

pub fn shift(start: &str, end: &str, lunch: Option<&str>) -> ShiftConfig {
    ShiftConfig::new(start, end, lunch.is_some(), lunch.unwrap_or("00:00"))
}

/// (label, start, end, duration) for every interval
pub fn summary(result: &shiftsplit::CalculationResult) -> Vec<(String, String, String, i64)> {
    result
        .intervals
        .iter()
        .map(|i| {
            (
                i.label().to_string(),
                i.start_time(),
                i.end_time(),
                i.duration_minutes,
            )
        })
        .collect()
}
