//! Lenient value parsing for string-typed dataset cells.
//!
//! Every numeric cell is kept as text in the row types and parsed only when an
//! aggregate needs it. Parsing never fails: a bad observation contributes `0`
//! and a bad year simply never matches a year range.

/// Parses an observation value, returning `0.0` for empty, invalid, or
/// non-finite input. `-0` reads as `0.0` so zero totals rank as equals.
pub fn parse_observation(value: &str) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => parsed + 0.0,
        _ => 0.0,
    }
}

/// Parses a year cell from its leading integer digits.
///
/// `"2018"`, `" 2018 "` and `"2018.0"` all yield `Some(2018)`; a cell without
/// leading digits yields `None`.
pub fn parse_year(value: &str) -> Option<i32> {
    let trimmed = value.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].parse::<i32>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Formats a floating-point number without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
