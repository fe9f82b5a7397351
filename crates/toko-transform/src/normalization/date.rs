//! Stock-ledger date resolution.

use chrono::NaiveDate;
use tracing::debug;

/// Resolves a ledger date string, falling back progressively.
///
/// 1. direct parse as `YYYY-MM-DD` or `DD/MM/YYYY`;
/// 2. manual reassembly of the digit groups as day/month/year (tolerates
///    `-`, `.` or mixed separators and stray text);
/// 3. the injected `fallback` date (the migration clock).
pub fn parse_ledger_date(value: &str, fallback: NaiveDate) -> NaiveDate {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return fallback;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%d/%m/%Y") {
        return date;
    }
    if let Some(date) = reassemble_dmy(trimmed) {
        return date;
    }
    debug!(value = trimmed, "unparseable ledger date, using migration clock");
    fallback
}

/// Reads the first three digit groups as day, month, four-digit year.
fn reassemble_dmy(value: &str) -> Option<NaiveDate> {
    let mut groups = value
        .split(|ch: char| !ch.is_ascii_digit())
        .filter(|group| !group.is_empty());
    let day: u32 = groups.next()?.parse().ok()?;
    let month: u32 = groups.next()?.parse().ok()?;
    let year_group = groups.next()?;
    if year_group.len() != 4 {
        return None;
    }
    let year: i32 = year_group.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
