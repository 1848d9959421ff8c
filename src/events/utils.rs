/// What: Remove the last word (and any whitespace after it) from `s`.
///
/// Output:
/// - Text with the trailing word removed, like readline's `Ctrl+W`.
pub fn without_last_word(s: &str) -> String {
    let trimmed = s.trim_end();
    let cut = trimmed
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8());
    trimmed[..cut].to_string()
}
