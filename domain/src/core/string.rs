//! String utilities for the domain layer.

/// Shorten `s` to at most `max_chars` characters for log lines, appending
/// `...` when something was cut.
///
/// Counts characters rather than bytes so candidate answers with accents
/// (`"Juan Pérez"`) are never split inside a code point.
pub fn preview(s: &str, max_chars: usize) -> String {
    let single_line = s.trim().replace('\n', " ");
    if single_line.chars().count() <= max_chars {
        return single_line;
    }
    let kept: String = single_line
        .chars()
        .take(max_chars.saturating_sub(3))
        .collect();
    format!("{}...", kept)
}

/// Number of characters after trimming surrounding whitespace.
pub fn trimmed_char_count(s: &str) -> usize {
    s.trim().chars().count()
}
