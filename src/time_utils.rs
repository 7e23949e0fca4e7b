// SPDX-License-Identifier: MIT

//! Shared helpers for calendar-date parsing and formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a client-supplied date string into a calendar date.
///
/// Accepts `YYYY-MM-DD`, a naive datetime, or an RFC3339 timestamp; any
/// time-of-day component is discarded so the same calendar day always
/// round-trips.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.date());
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}

/// Format a date the human-readable way, e.g. `Sun Jan 15 2023`.
pub fn format_date_string(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Today's calendar date (UTC).
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
