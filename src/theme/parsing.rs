/// What: Remove inline comments from a configuration value.
///
/// Inputs:
/// - `s`: Raw value that may include an inline comment.
///
/// Output:
/// - Comment-free & trimmed substring of the input.
///
/// Details:
/// - Strips trailing `//` sections and anything after a `#` preceded by whitespace,
///   so values such as `people#2.json` survive.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find(" //").or_else(|| s.find("\t//")) {
        s = &s[..i];
    }
    if let Some(i) = s.find(" #").or_else(|| s.find("\t#")) {
        s = &s[..i];
    }
    s.trim()
}

/// What: Interpret a loose boolean value.
///
/// Output:
/// - `Some(true)` for `true/1/yes/on`, `Some(false)` for `false/0/no/off`, `None` otherwise.
pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// What: Normalize a configuration key.
///
/// Details:
/// - Lower-cases and maps `.`, `-` and spaces to `_` so `Debounce-MS` equals `debounce_ms`.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}
