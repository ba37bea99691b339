//! Date formatting for vCard properties.
//!
//! The backend serves dates in a handful of shapes (ISO date, ISO datetime
//! with or without offset, `YYYY/MM/DD`, `DD-MM-YYYY`, compact `YYYYMMDD`).
//! Everything funnels through [`parse_date`]; unparsable input is a soft
//! gap, never an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a date-like string to a calendar date. Tries the formats the
/// backend actually emits, most common first.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(v, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(v, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(v, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(v) {
        // Keep the calendar date as written, no timezone conversion.
        return Some(dt.date_naive());
    }
    if let Ok(d) = NaiveDate::parse_from_str(v, "%Y/%m/%d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(v, "%d-%m-%Y") {
        return Some(d);
    }
    // Compact YYYYMMDD (chrono's %Y is greedy, so split by hand)
    if v.len() == 8 && v.bytes().all(|b| b.is_ascii_digit()) {
        let year = v[0..4].parse().ok()?;
        let month = v[4..6].parse().ok()?;
        let day = v[6..8].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    None
}

/// Compact `YYYYMMDD` vCard date form, zero-padded. `None` when the input
/// doesn't parse.
pub fn to_vcard_date(value: &str) -> Option<String> {
    parse_date(value).map(|d| d.format("%Y%m%d").to_string())
}

/// REV timestamp of the form `YYYYMMDDT000000Z`.
///
/// The clock component is always zeroed and labelled UTC: only the calendar
/// date of the modification survives. This reproduces the wire format the
/// existing importer ecosystem was built against; preserving the true
/// modification time is an open product question (see DESIGN.md).
pub fn to_revision_timestamp(value: &str) -> Option<String> {
    parse_date(value).map(|d| format!("{}T000000Z", d.format("%Y%m%d")))
}
