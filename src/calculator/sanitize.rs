//! Input sanitization for calculator expressions.

/// Characters an expression may contain before whitespace is stripped.
pub(crate) fn is_allowed_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '*' | ' ')
}

/// Strip `input` down to digits, `.`, `+` and `*`.
///
/// Every other character is discarded, then all whitespace is removed.
/// This never fails; an empty input yields an empty string.
pub fn clean(input: &str) -> String {
    input
        .chars()
        .filter(|&c| is_allowed_char(c))
        .filter(|c| !c.is_whitespace())
        .collect()
}
