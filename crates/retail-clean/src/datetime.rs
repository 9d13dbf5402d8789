//! Calendar date parsing for transaction dates.

use chrono::{NaiveDate, NaiveDateTime};

/// Latest date a transaction may carry; later dates are clamped down to it.
pub fn latest_valid_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid calendar date")
}

/// Try to parse date-only formats, ISO first.
const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%b-%Y",  // 15-Jan-2024
    "%d/%m/%Y",  // European: 15/01/2024
    "%m/%d/%Y",  // US: 01/15/2024
    "%Y%m%d",    // Compact: 20240115
    "%b %d, %Y", // Jan 15, 2024
    "%d %b %Y",  // 15 Jan 2024
];

/// Datetime formats whose date part is used when no date-only format matches.
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses a raw value as a calendar date.
///
/// Formats are tried in a fixed order and the first match wins, so ambiguous
/// slash dates resolve European-style. Returns `None` for missing, empty, or
/// unparseable input; the caller decides what a missing date means.
pub fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    for fmt in &DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }
    for fmt in &DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
    }
    None
}
