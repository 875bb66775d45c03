//! Timestamp parsing for Lemmy's date strings.
//!
//! Lemmy serializes most timestamps as naive UTC (`2023-06-20T12:34:56.789012`),
//! newer servers send RFC 3339 with an offset. Wire types keep the raw
//! string; these helpers give a `DateTime<Utc>` view on demand.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse a Lemmy timestamp. Naive values are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT)
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}
