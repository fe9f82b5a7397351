//! Monetary value parsing.
//!
//! The legacy exports mix `1.234,56` (European) and `1,234.56` (US) group and
//! decimal conventions, bare integers, and the literal string `NULL`. All
//! monetary values in this system are whole currency units, so everything
//! parses to an integer.

/// Parses a legacy monetary string to a whole currency amount.
///
/// Separator resolution:
/// - both `,` and `.` present: the one that occurs last is the decimal
///   separator, the other is a grouping separator;
/// - only `.` present: a trailing group of exactly 3 digits marks it as a
///   grouping separator, anything else as a decimal point (heuristic, kept
///   from the legacy system);
/// - only `,` present: decimal separator.
///
/// Blank input, `NULL`, and anything that still fails to parse after cleaning
/// all yield 0. The result is rounded to the nearest integer.
pub fn parse_amount(value: &str) -> i64 {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "NULL" {
        return 0;
    }
    let cleaned: String = trimmed
        .chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, ',' | '.' | '-'))
        .collect();
    let last_comma = cleaned.rfind(',');
    let last_dot = cleaned.rfind('.');
    let normalized = match (last_comma, last_dot) {
        (Some(comma), Some(dot)) => {
            if comma > dot {
                cleaned.replace('.', "").replace(',', ".")
            } else {
                cleaned.replace(',', "")
            }
        }
        (None, Some(dot)) => {
            let trailing = cleaned.len() - dot - 1;
            if trailing == 3 {
                cleaned.replace('.', "")
            } else {
                cleaned
            }
        }
        (Some(_), None) => cleaned.replace(',', "."),
        (None, None) => cleaned,
    };
    normalized
        .parse::<f64>()
        .map(|parsed| parsed.round() as i64)
        .unwrap_or(0)
}
