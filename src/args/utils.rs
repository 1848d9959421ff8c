//! Shared utilities for argument processing.

use std::time::Duration;

use crate::app::RunOptions;
use crate::args::Args;
use crate::theme::Settings;

/// What: Determine the log level from arguments and settings.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - `--verbose` beats `--log-level`, which beats the `log_level` setting.
#[must_use]
pub fn determine_log_level(args: &Args, settings: &Settings) -> String {
    if args.verbose {
        "debug".to_string()
    } else if let Some(level) = &args.log_level {
        level.clone()
    } else {
        settings.log_level.clone()
    }
}

/// What: Merge CLI flags over settings into TUI startup options.
///
/// Details:
/// - CLI values override settings; settings already hold the defaults for
///   anything the config file leaves out.
#[must_use]
pub fn run_options(args: &Args, settings: &Settings) -> RunOptions {
    let mut opts = RunOptions::from(settings);
    if let Some(ms) = args.delay {
        opts.delay = Duration::from_millis(ms);
    }
    if let Some(path) = &args.data {
        opts.data_file = Some(path.clone());
    }
    opts
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    /// What: Verbose wins, then the CLI level, then the setting.
    fn log_level_precedence() {
        let settings = Settings {
            log_level: "warn".to_string(),
            ..Settings::default()
        };
        let mut args = Args::default();
        assert_eq!(determine_log_level(&args, &settings), "warn");
        args.log_level = Some("trace".to_string());
        assert_eq!(determine_log_level(&args, &settings), "trace");
        args.verbose = true;
        assert_eq!(determine_log_level(&args, &settings), "debug");
    }

    #[test]
    /// What: CLI delay and data file override settings; the rest passes through.
    fn cli_overrides_settings() {
        let settings = Settings {
            debounce: Duration::from_millis(500),
            data_file: Some(PathBuf::from("/a.json")),
            show_hints: false,
            ..Settings::default()
        };
        let args = Args {
            delay: Some(50),
            data: Some(PathBuf::from("/b.json")),
            ..Args::default()
        };
        let opts = run_options(&args, &settings);
        assert_eq!(opts.delay, Duration::from_millis(50));
        assert_eq!(opts.data_file, Some(PathBuf::from("/b.json")));
        assert!(!opts.show_hints);

        let untouched = run_options(&Args::default(), &settings);
        assert_eq!(untouched.delay, Duration::from_millis(500));
        assert_eq!(untouched.data_file, Some(PathBuf::from("/a.json")));
    }
}
