//! Lenient ISO-8601 parsing for client-supplied timestamps.
//!
//! A value that cannot be parsed is treated as absent; callers simply leave
//! the record out of any date-windowed computation.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

const OFFSET_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a timestamp, reading a trailing `Z` as `+00:00`. Naive values are
/// taken as UTC and a bare date as UTC midnight.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let s = raw.trim().replace('Z', "+00:00");
    if s.is_empty() {
        return None;
    }

    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&s, fmt).ok())
    {
        return Some(dt);
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    Some(naive.and_utc().fixed_offset())
}

/// True when `raw` parses to an instant at or after `cutoff`.
pub fn is_on_or_after(raw: Option<&str>, cutoff: DateTime<Utc>) -> bool {
    raw.and_then(parse_timestamp)
        .is_some_and(|dt| dt.with_timezone(&Utc) >= cutoff)
}
