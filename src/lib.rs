//! shiftsplit library root.
//! Exposes the allocator, the job list and planner, the CLI parser and the
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

pub use crate::core::{JobList, Planner, calculate_intervals};
pub use models::{CalculatedInterval, CalculationResult, IntervalKind, Job, JobColor, ShiftConfig};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    let color = cfg.color_output && !cli.no_color;

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Jobs => cli::commands::jobs::handle(cfg, color),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, cfg, color),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let cfg_path = Config::resolve_path(cli.config.as_deref());
    let cfg = Config::load(&cfg_path)?;

    dispatch(&cli, &cfg, &cfg_path)
}
