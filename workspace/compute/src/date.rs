//! Conversion of the service's date keys into display labels.
//!
//! The service does not commit to one date format, so keys are parsed on a
//! best-effort basis and never rejected. Two granularities come out of it:
//! keys that parse as a calendar date directly get a day-level label
//! (`January 1, 2024`), keys that only parse after being split into
//! year/month/day components get a month-level label (`January 2024`).
//! The granularity is kept in [`DateLabel`] so callers can tell them apart.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta};
use std::fmt;
use tracing::{debug, trace};

const DAY_LABEL_FORMAT: &str = "%B %-d, %Y";
const MONTH_LABEL_FORMAT: &str = "%B %Y";

/// Naive formats tried by the direct parse, in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y"];
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Display label for a forecast date key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateLabel {
    /// Parsed directly as a calendar date
    Day(NaiveDate),
    /// Parsed only after splitting into components; day precision dropped
    Month(NaiveDate),
    /// Not a recognizable date; shown verbatim
    Raw(String),
}

impl fmt::Display for DateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateLabel::Day(date) => write!(f, "{}", date.format(DAY_LABEL_FORMAT)),
            DateLabel::Month(date) => write!(f, "{}", date.format(MONTH_LABEL_FORMAT)),
            DateLabel::Raw(raw) => f.write_str(raw),
        }
    }
}

/// Normalizes a raw date key into a display label. Never fails.
pub fn normalize(raw: &str) -> DateLabel {
    let trimmed = raw.trim();

    if let Some(date) = parse_direct(trimmed) {
        return DateLabel::Day(date);
    }

    // Keys may carry trailing text after a space (times, zone names, notes)
    let leading = trimmed.split_whitespace().next().unwrap_or_default();
    if leading != trimmed {
        if let Some(date) = parse_direct(leading) {
            trace!(raw, "Parsed date key after stripping trailing text");
            return DateLabel::Day(date);
        }
    }

    match parse_components(leading) {
        Some(date) => {
            debug!(raw, %date, "Date key parsed from components, using month granularity");
            DateLabel::Month(date)
        }
        None => {
            debug!(raw, "Could not parse date key, passing it through");
            DateLabel::Raw(raw.to_string())
        }
    }
}

/// Convenience wrapper returning the label text.
pub fn normalize_label(raw: &str) -> String {
    normalize(raw).to_string()
}

fn parse_direct(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(s, format) {
            return Some(date_time.date());
        }
    }

    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_rfc2822(s))
        .map(|date_time| date_time.date_naive())
        .ok()
}

/// Splits on `-` or `/` and reads (year, month, day) with month 1-indexed.
/// Out-of-range months and days roll over into the following period.
fn parse_components(s: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = s.split(['-', '/']).collect();
    if parts.len() < 3 {
        return None;
    }

    let year: i64 = parts[0].trim().parse().ok()?;
    let month: i64 = parts[1].trim().parse().ok()?;
    let day: i64 = parts[2].trim().parse().ok()?;

    // Components are arbitrary integers, so every step is checked
    let month_index = month.checked_sub(1)?;
    let year = i32::try_from(year.checked_add(month_index.div_euclid(12))?).ok()?;
    let month = u32::try_from(month_index.rem_euclid(12) + 1).ok()?;

    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    first_of_month.checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)
}
