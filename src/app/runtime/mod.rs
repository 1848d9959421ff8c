use std::path::PathBuf;
use std::time::Duration;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::logic::DEFAULT_DELAY;
use crate::sources::load_records;
use crate::state::AppState;
use crate::state::app_state::DEFAULT_PLACEHOLDER;
use crate::theme::Settings;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod cleanup;
mod scheduler;

use background::spawn_event_thread;
use channels::Channels;
use cleanup::cleanup_on_exit;
pub use scheduler::TokioScheduler;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment variable that skips terminal setup and the input thread.
const HEADLESS_ENV: &str = "PEOPLEFIND_TEST_HEADLESS";

/// Resolved startup options for the TUI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Debounce delay for the search box.
    pub delay: Duration,
    /// JSON file with records; built-in dataset when `None`.
    pub data_file: Option<PathBuf>,
    /// Text shown in the empty search box.
    pub placeholder: String,
    /// Whether the key-hint footer is drawn.
    pub show_hints: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            data_file: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            show_hints: true,
        }
    }
}

impl From<&Settings> for RunOptions {
    fn from(s: &Settings) -> Self {
        Self {
            delay: s.debounce,
            data_file: s.data_file.clone(),
            placeholder: s.placeholder.clone(),
            show_hints: s.show_hints,
        }
    }
}

/// What: Run the peoplefind TUI end-to-end.
///
/// Inputs:
/// - `opts`: Delay, data source and display options
///
/// Output:
/// - `Ok(())` when the user quits; `Err` on startup or terminal failures.
///
/// # Errors
/// - Record loading errors ([`crate::sources::DataError`]) abort before the
///   terminal is touched.
/// - Terminal setup/restore and backend creation errors.
///
/// Details:
/// - Timers run as tokio tasks and come back as ids on a channel, so the
///   controller only ever sees them from this loop.
/// - After each input event, selection messages are drained before the next
///   redraw so the title never lags a click.
/// - The controller is unmounted and the terminal restored on every exit path
///   that reaches the loop.
pub async fn run(opts: RunOptions) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    let records = load_records(opts.data_file.as_deref())?;
    tracing::info!(
        count = records.len(),
        delay_ms = u64::try_from(opts.delay.as_millis()).unwrap_or(u64::MAX),
        headless,
        "starting peoplefind"
    );

    let mut channels = Channels::new();
    let scheduler = TokioScheduler::new(channels.timer_tx.clone());
    let mut app = AppState::new(
        records,
        opts.delay,
        Box::new(scheduler),
        channels.selection_tx.clone(),
    );
    app.placeholder = opts.placeholder;
    app.show_hints = opts.show_hints;

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
            Ok(t) => Some(t),
            Err(e) => {
                let _ = restore_terminal();
                return Err(e.into());
            }
        }
    };

    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, &mut app))
        {
            tracing::warn!(error = %e, "draw failed");
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app) {
                    break;
                }
                app.drain_selection(&mut channels.selection_rx);
            }
            Some(id) = channels.timer_rx.recv() => {
                app.autocomplete.handle_timer_fired(id);
            }
            Some(selection) = channels.selection_rx.recv() => {
                app.apply_selection(selection);
            }
            else => break,
        }
    }

    cleanup_on_exit(&mut app, &channels);
    drop(terminal);
    if !headless {
        restore_terminal()?;
    }
    tracing::info!("peoplefind exited");
    Ok(())
}
