//! Timestamp parsing for trace records
//!
//! Accepted forms, tried in order:
//! - RFC 3339 (`2024-03-01T09:15:00Z`, `2024-03-01T10:15:00+01:00`)
//! - Naive date-time, interpreted as UTC (`2024-03-01 09:15:00`, optional fraction)
//! - Seconds since the Unix epoch (`1709284500`, `1709284500.25`)

use crate::types::Timestamp;
use chrono::{DateTime, NaiveDateTime, Utc};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Parse a timestamp field, returning `None` if no accepted form matches
pub fn parse_timestamp(value: &str) -> Option<Timestamp> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    parse_epoch_seconds(value)
}

fn parse_epoch_seconds(value: &str) -> Option<Timestamp> {
    let seconds: f64 = value.parse().ok()?;
    if !seconds.is_finite() {
        return None;
    }

    let whole = seconds.floor();
    let nanos = ((seconds - whole) * NANOS_PER_SEC).round().min(NANOS_PER_SEC - 1.0) as u32;

    DateTime::from_timestamp(whole as i64, nanos)
}
