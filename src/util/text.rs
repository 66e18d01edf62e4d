/// Maximum number of characters of unconsumed input shown in diagnostics.
pub const FRAGMENT_LIMIT: usize = 20;

/// Truncates `text` to at most `limit` characters, appending `...` when
/// anything was cut.
///
/// Truncation counts characters, not bytes, so multi-byte input is never split.
///
/// ## Example
/// ```
/// use hellm::util::text::truncate_for_display;
///
/// assert_eq!(truncate_for_display("short", 20), "short");
/// assert_eq!(truncate_for_display("abcdef", 3), "abc...");
/// ```
#[must_use]
pub fn truncate_for_display(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
