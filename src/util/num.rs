/// Parses a `use` argument index.
///
/// Only non-empty runs of ASCII digits are accepted. Values that do not fit in
/// a `usize` are rejected rather than wrapped.
///
/// ## Parameters
/// - `text`: The captured identifier text.
///
/// ## Returns
/// - `Some(usize)`: The parsed index.
/// - `None`: If the text is not a non-negative base-10 integer.
///
/// ## Example
/// ```
/// use hellm::util::num::parse_arg_index;
///
/// assert_eq!(parse_arg_index("0"), Some(0));
/// assert_eq!(parse_arg_index("12"), Some(12));
/// assert_eq!(parse_arg_index("x1"), None);
/// assert_eq!(parse_arg_index("99999999999999999999999"), None);
/// ```
#[must_use]
pub fn parse_arg_index(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
