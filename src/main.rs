//! peoplefind binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use peoplefind::{app, args, theme};

/// Log timestamp formatter using local time.
struct PeoplefindTimer;

impl tracing_subscriber::fmt::time::FormatTime for PeoplefindTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `level`: Fallback filter when `RUST_LOG` is unset or invalid
///
/// Details:
/// - Writes to `~/.config/peoplefind/logs/peoplefind.log`; the TUI owns the
///   screen, so stderr is only used when the file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = theme::logs_dir();
    log_path.push("peoplefind.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(PeoplefindTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(PeoplefindTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    let settings = theme::settings();
    init_logging(&args::determine_log_level(&cli, &settings));

    if let Some(code) = args::process_args(&cli, &settings) {
        std::process::exit(code);
    }

    let opts = args::run_options(&cli, &settings);
    if let Err(err) = app::run(opts).await {
        tracing::error!(error = %err, "application error");
        eprintln!("peoplefind: {err}");
        std::process::exit(1);
    }
}
