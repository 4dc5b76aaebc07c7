//! Formatting of numeric results for display and for the clipboard.

use crate::config::DisplayConfig;

/// Integral values below this magnitude are printed without decimals.
const INTEGER_DISPLAY_LIMIT: f64 = 1e15;

/// Format a result for display, optionally with thousand separators.
pub fn format_display(value: f64, config: &DisplayConfig) -> String {
    let raw = format_clipboard(value, config.precision);
    if !config.thousands_separators || !value.is_finite() {
        return raw;
    }

    match raw.split_once('.') {
        Some((int_part, dec_part)) => format!("{}.{}", group_thousands(int_part), dec_part),
        None => group_thousands(&raw),
    }
}

/// Format a result as a raw number (no separators).
pub fn format_clipboard(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return "Infinity".to_string();
    }

    if value.fract() == 0.0 && value.abs() < INTEGER_DISPLAY_LIMIT {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{:.*}", precision, value);
        if formatted.contains('.') {
            formatted
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        } else {
            formatted
        }
    }
}

/// Insert `,` between every group of three digits.
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
