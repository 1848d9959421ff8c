use std::fs;
use std::path::Path;

use crate::theme::paths::{config_dir, resolve_settings_config_path};
use crate::theme::types::Settings;

mod parse_settings;

pub use parse_settings::parse_settings;

/// Skeleton written on first run so users can discover the available keys.
pub const SETTINGS_SKELETON_CONTENT: &str = "# peoplefind settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments.\n\
#\n\
# Milliseconds between the last keystroke and refreshing suggestions.\n\
debounce_ms = 300\n\
#\n\
# JSON array of people (slug, name, sex, born, died). Empty = built-in list.\n\
data_file =\n\
#\n\
# Text shown in the empty search box.\n\
placeholder = Enter a part of the name\n\
#\n\
# Default log level (trace, debug, info, warn, error). RUST_LOG overrides it.\n\
log_level = info\n\
#\n\
# Show the key-hint footer.\n\
show_hints = true\n";

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: settings.conf location
///
/// Output:
/// - Parsed settings; defaults when the file cannot be read.
#[must_use]
pub fn settings_from_path(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, &mut out);
            tracing::debug!(path = %path.display(), "loaded settings");
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read settings; using defaults");
        }
    }
    out
}

/// What: Load user settings from `settings.conf` under HOME/XDG.
///
/// Inputs:
/// - None (reads `settings.conf` if present)
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing.
///
/// Details:
/// - When no file exists yet, writes the commented skeleton so the next run
///   (and the user) can find it.
#[must_use]
pub fn settings() -> Settings {
    if let Some(path) = resolve_settings_config_path() {
        return settings_from_path(&path);
    }
    let target = config_dir().join("settings.conf");
    if !target.exists() {
        match fs::write(&target, SETTINGS_SKELETON_CONTENT) {
            Ok(()) => tracing::info!(path = %target.display(), "wrote default settings skeleton"),
            Err(e) => tracing::debug!(path = %target.display(), error = %e, "could not write settings skeleton"),
        }
    }
    Settings::default()
}
