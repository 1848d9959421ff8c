//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

use crate::sources::load_records;
use crate::theme::Settings;

/// peoplefind - search a list of people by name from the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "peoplefind")]
#[command(version)]
#[command(about = "Search a list of people by name, with suggestions as you type", long_about = None)]
pub struct Args {
    /// Debounce delay in milliseconds between the last keystroke and the suggestion update
    #[arg(long, value_name = "MS")]
    pub delay: Option<u64>,

    /// JSON file with people records (defaults to the built-in dataset)
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Print the people matching QUERY and exit without starting the TUI
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Print every record and exit
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Handle the flags that print and exit instead of starting the TUI.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `settings`: Loaded settings (supplies the data file when `--data` is absent)
///
/// Output:
/// - `Some(exit_code)` when a print-and-exit mode ran; `None` to continue to the TUI.
///
/// Details:
/// - `--search` wins over `--list` when both are given.
/// - Load errors are reported on stderr and yield exit code 1.
pub fn process_args(args: &Args, settings: &Settings) -> Option<i32> {
    if args.search.is_none() && !args.list {
        return None;
    }
    let data = args.data.as_deref().or(settings.data_file.as_deref());
    let records = match load_records(data) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("peoplefind: {e}");
            tracing::error!(error = %e, "failed to load records");
            return Some(1);
        }
    };
    let mut out = std::io::stdout().lock();
    let result = if let Some(query) = &args.search {
        tracing::info!(query = %query, "search mode requested from CLI");
        super::search::write_matches(query, &records, &mut out).map(|_| ())
    } else {
        super::list::write_all(&records, &mut out)
    };
    match result {
        Ok(()) => Some(0),
        Err(e) => {
            tracing::error!(error = %e, "failed to write output");
            Some(1)
        }
    }
}
