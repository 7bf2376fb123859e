// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar-date parsing and formatting.

use chrono::{NaiveDate, Utc};

/// Today's date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse a client-supplied calendar date in `YYYY-MM-DD` form.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// Render a calendar date in the human-readable form used by all
/// API responses, e.g. `"Mon Jan 01 2024"`.
pub fn format_date_string(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}
