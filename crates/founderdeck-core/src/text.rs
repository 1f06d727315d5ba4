//! Form-input coercion helpers shared by callers that accept
//! textarea-style or loosely-typed values.

/// Split a textarea-style value into trimmed, non-empty entries.
///
/// Entries are separated by newlines or commas; surrounding whitespace
/// (including a trailing `\r`) is dropped.
pub fn parse_line_list(value: &str) -> Vec<String> {
    value
        .split(|c| c == '\n' || c == ',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lenient boolean coercion for form values.
///
/// `true`, `1`, `yes`, and `on` (case-insensitive, after trim) are true;
/// everything else is false.
pub fn parse_boolean(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
