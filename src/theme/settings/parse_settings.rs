use std::path::PathBuf;
use std::time::Duration;

use crate::theme::parsing::{normalize_key, parse_bool, strip_inline_comment};
use crate::theme::types::Settings;

/// What: Parse settings from settings.conf content.
///
/// Inputs:
/// - `content`: Content of the settings.conf file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - `key = value` per line; `#` and `//` start comments.
/// - Unknown keys are ignored; values that fail to parse keep the previous value.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            continue;
        };
        let key = normalize_key(raw_key);
        let val = strip_inline_comment(raw_val.trim());
        match key.as_str() {
            "debounce_ms" | "delay_ms" | "delay" => match val.parse::<u64>() {
                Ok(ms) => settings.debounce = Duration::from_millis(ms),
                Err(_) => tracing::warn!(value = %val, "ignoring invalid debounce_ms"),
            },
            "data_file" | "data" | "people_file" => {
                settings.data_file = if val.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(val))
                };
            }
            "placeholder" => {
                settings.placeholder = val.to_string();
            }
            "log_level" => {
                if !val.is_empty() {
                    settings.log_level = val.to_ascii_lowercase();
                }
            }
            "show_hints" | "show_keybinds_footer" => {
                if let Some(b) = parse_bool(val) {
                    settings.show_hints = b;
                }
            }
            _ => {
                tracing::debug!(key = %key, "unknown setting ignored");
            }
        }
    }
}
