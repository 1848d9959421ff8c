use std::path::PathBuf;
use std::time::Duration;

use ratatui::style::Color;

use crate::logic::DEFAULT_DELAY;
use crate::state::app_state::DEFAULT_PLACEHOLDER;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Subtle surface color for borders of unfocused widgets.
    pub surface2: Color,
    /// Muted line/border color.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text (placeholder, hints).
    pub subtext0: Color,
    /// Link color; male names are drawn in it.
    pub sapphire: Color,
    /// Heading color for the title row.
    pub mauve: Color,
    /// Danger color; female names and the empty-result notice use it.
    pub red: Color,
    /// Accent used for the focused input border.
    pub lavender: Color,
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),        // #1e1e2e
            surface2: Color::Rgb(88, 91, 112),   // #585b70
            overlay1: Color::Rgb(127, 132, 156), // #7f849c
            text: Color::Rgb(205, 214, 244),     // #cdd6f4
            subtext0: Color::Rgb(166, 173, 200), // #a6adc8
            sapphire: Color::Rgb(116, 199, 236), // #74c7ec
            mauve: Color::Rgb(203, 166, 247),    // #cba6f7
            red: Color::Rgb(243, 139, 168),      // #f38ba8
            lavender: Color::Rgb(180, 190, 254), // #b4befe
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Debounce delay between the last keystroke and recomputing suggestions.
    pub debounce: Duration,
    /// JSON file with records; the built-in dataset is used when `None`.
    pub data_file: Option<PathBuf>,
    /// Text shown in the empty search box.
    pub placeholder: String,
    /// Default log level when neither `RUST_LOG` nor the CLI sets one.
    pub log_level: String,
    /// Whether the key-hint footer is drawn.
    pub show_hints: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DELAY,
            data_file: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            log_level: "info".to_string(),
            show_hints: true,
        }
    }
}
