//! Cell value parsing helpers shared by the transform layer.

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<i64>().ok()
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

/// Parses a cumulative count, tolerating a decimal rendering ("12.0" is 12).
pub fn parse_count(value: &str) -> Option<i64> {
    parse_i64(value).or_else(|| parse_f64(value).map(|v| v as i64))
}

/// Blank cells become an explicit absent marker, never an empty string.
pub fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
