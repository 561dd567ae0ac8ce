// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and formatting.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

const SECONDS_PER_DAY: i64 = 86_400;

/// Parse a timestamp the way the hosted table renders it.
///
/// Accepts RFC3339 (`2024-01-15T10:30:00Z`, `2024-01-15T10:30:00+02:00`),
/// naive date-times with either `T` or a space separator, and plain dates.
/// The source offset is kept so dates print as written; naive values get
/// a zero offset. Ordering compares the UTC instant.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }

    // Postgres `timestamptz` text output uses a space and a short offset.
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(dt);
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Format a timestamp as `YYYY-MM-DD` in its own offset.
pub fn format_date(date: DateTime<FixedOffset>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a timestamp for chart axes (`YYYY-MM-DD HH:MM:SS`) in its own offset.
pub fn format_chart_timestamp(date: DateTime<FixedOffset>) -> String {
    date.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format a duration in seconds as the time-of-day part of a timedelta.
///
/// Whole days are dropped: 25 hours renders as `01:00:00`. Sub-second
/// precision renders with six digits, e.g. `00:00:01.500000`. Negative
/// durations count back from a negative day and carry a `+` sign, so one
/// second short of zero renders as `+23:59:59`.
pub fn format_duration_clock(seconds: f64) -> String {
    let micros_total = (seconds * 1_000_000.0).round() as i64;
    let whole = micros_total.div_euclid(1_000_000);
    let micros = micros_total.rem_euclid(1_000_000);

    let of_day = whole.rem_euclid(SECONDS_PER_DAY);
    let hours = of_day / 3600;
    let minutes = (of_day % 3600) / 60;
    let secs = of_day % 60;

    let sign = if micros_total < 0 { "+" } else { "" };

    if micros == 0 {
        format!("{}{:02}:{:02}:{:02}", sign, hours, minutes, secs)
    } else {
        format!("{}{:02}:{:02}:{:02}.{:06}", sign, hours, minutes, secs, micros)
    }
}
