//! Configuration and palette for peoplefind.
//!
//! Split into submodules; public re-exports keep the `crate::theme::*` API stable.

/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings access.
mod settings;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, logs_dir};
pub use settings::{SETTINGS_SKELETON_CONTENT, parse_settings, settings, settings_from_path};
pub use types::{Settings, Theme};

/// What: Return the application's palette.
///
/// Output:
/// - The built-in Catppuccin Mocha palette; styling is not user-configurable.
#[must_use]
pub fn theme() -> Theme {
    Theme::default()
}
