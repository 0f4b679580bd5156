#[cfg(test)]
#[path = "./utils.tests.rs"]
mod utils_tests;

/// Truncates a string slice to the new length.
pub fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Tries to truncate a string slice to the new length.\
/// Returns `None` if the string slice is already short enough.
pub fn try_truncate(s: &str, max_chars: usize) -> Option<&str> {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => Some(&s[..idx]),
        None => None,
    }
}

/// Adds padding to the string slice, aligning it to the left or to the right.\
/// **Note** that text longer than `width` is truncated.
pub fn add_padding(s: &str, width: usize, to_right: bool) -> String {
    let text = truncate(s, width);
    let padding_len = width.saturating_sub(text.chars().count());

    let mut result = String::with_capacity(width);
    if to_right {
        result.extend(std::iter::repeat_n(' ', padding_len));
        result.push_str(text);
    } else {
        result.push_str(text);
        result.extend(std::iter::repeat_n(' ', padding_len));
    }

    result
}
