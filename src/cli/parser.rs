use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftsplit
#[derive(Parser)]
#[command(
    name = "shiftsplit",
    version = env!("CARGO_PKG_VERSION"),
    about = "Split a work shift evenly among jobs, around a fixed 30 minute lunch break",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Disable coloured output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the configured job list
    Jobs,

    /// Compute the split of a shift among jobs
    Calc {
        /// Shift start (HH:MM, or "now")
        #[arg(long = "start", help = "Shift start time (HH:MM or now)")]
        start: Option<String>,

        /// Shift end (HH:MM); earlier than start means an overnight shift
        #[arg(long = "end", help = "Shift end time (HH:MM)")]
        end: Option<String>,

        /// Lunch break start (HH:MM); enables the break
        #[arg(
            long = "lunch",
            conflicts_with = "no_lunch",
            help = "Lunch break start time (HH:MM), break lasts 30 minutes"
        )]
        lunch: Option<String>,

        /// Disable the lunch break
        #[arg(long = "no-lunch", help = "Do not include a lunch break")]
        no_lunch: bool,

        /// Job as NAME or NAME:COLOR, repeatable; replaces the configured jobs
        ///
        /// Colors: indigo, emerald, rose, sky, violet, orange.
        /// An empty NAME is shown as "Job <n>".
        #[arg(long = "job", short = 'j', value_name = "NAME[:COLOR]")]
        jobs: Vec<String>,

        #[arg(long, value_enum, default_value = "text")]
        format: ExportFormat,

        /// Write the output to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f', requires = "file")]
        force: bool,
    },
}
