//! Date and time utility functions
//!
//! This module converts between the ISO-8601 wire format used by the course
//! API and the handful of display formats the app shows (course start dates,
//! schedule rows, due-date pills), and answers simple questions about a date
//! relative to "now".
//!
//! Parsing and formatting never fail loudly: a bad input is logged and turned
//! into a sentinel (`None` or an empty string). The comparison predicates are
//! the exception and return a [`DateError`] instead, see their docs.

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};

use crate::config::RenderTimezone;

/// Long date used for "course starts on" banners: "February 21, 2024"
pub const LONG_DATE_FORMAT: &str = "%B %d, %Y";

/// Weekday-prefixed date used in schedule rows: "Wed, Feb 21, 2024"
pub const WEEKDAY_DATE_FORMAT: &str = "%a, %b %d, %Y";

/// Day-granularity numeric date: "2024-02-21"
pub const SIMPLE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Second-granularity date and time: "21 Feb 2024 14:30:00"
pub const SIMPLE_DATE_TIME_FORMAT: &str = "%d %b %Y %H:%M:%S";

/// Month and unpadded day, no year: "February 21"
pub const MONTH_DAY_FORMAT: &str = "%B %-d";

/// ISO-8601 without a UTC offset, interpreted as UTC when parsed
const NAIVE_ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Errors surfaced by the comparison predicates
///
/// Only [`is_date_today`], [`is_date_past`] and [`is_date_due`] return these;
/// the formatters swallow failures and return sentinels instead. The split is
/// inherited from the upstream client, where the predicates had no catch
/// block, and is kept so callers of the predicates handle bad input
/// explicitly.
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    #[error("invalid date string: '{0}'")]
    InvalidDate(String),

    #[error("rendered date '{0}' failed to re-parse")]
    Reparse(String, #[source] chrono::ParseError),
}

/// Parse an ISO-8601 date-time string into a UTC instant
///
/// Accepts the common profile `YYYY-MM-DDTHH:mm:ss[.sss]['Z'|±HH:mm]`, plus
/// the offset-less variant which is taken to be UTC.
///
/// `None` input yields `None` without logging. Malformed input is logged at
/// error level and also yields `None`; parse errors never reach the caller.
pub fn parse_date(date: Option<&str>) -> Option<DateTime<Utc>> {
    let text = date?;

    match DateTime::parse_from_rfc3339(text) {
        Ok(dt) => {
            let utc = dt.with_timezone(&Utc);
            log::debug!("parsed '{}' as {}", text, utc);
            Some(utc)
        }
        Err(rfc3339_err) => match NaiveDateTime::parse_from_str(text, NAIVE_ISO_FORMAT) {
            Ok(naive) => {
                let utc = Utc.from_utc_datetime(&naive);
                log::debug!("parsed offset-less '{}' as {}", text, utc);
                Some(utc)
            }
            Err(_) => {
                log::error!("failed to parse date string '{}': {}", text, rfc3339_err);
                None
            }
        },
    }
}

/// Current instant serialized to ISO-8601 with millisecond precision
///
/// Always carries the explicit `Z` (UTC) designator, e.g.
/// "2024-02-21T14:30:00.123Z". This is the wire format the course API
/// expects back.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Render a UTC instant with a fixed pattern in the requested timezone
fn render(dt: DateTime<Utc>, pattern: &str, tz: RenderTimezone) -> String {
    match tz {
        RenderTimezone::Utc => dt.format(pattern).to_string(),
        RenderTimezone::Local => dt.with_timezone(&Local).format(pattern).to_string(),
    }
}

/// Format a course start date as "February 21, 2024"
///
/// Returns `None` (and logs) when the input is absent or malformed.
pub fn format_course_not_started_date(date: Option<&str>, tz: RenderTimezone) -> Option<String> {
    match parse_date(date) {
        Some(dt) => Some(render(dt, LONG_DATE_FORMAT, tz)),
        None => {
            log::error!("cannot format course start date from {:?}", date);
            None
        }
    }
}

/// Format a course date as "Wed, Feb 21, 2024"
///
/// Returns an empty string (and logs) when the input is absent or malformed.
pub fn format_course_date(date: Option<&str>, tz: RenderTimezone) -> String {
    match parse_date(date) {
        Some(dt) => render(dt, WEEKDAY_DATE_FORMAT, tz),
        None => {
            log::error!("cannot format course date from {:?}", date);
            String::new()
        }
    }
}

/// Format a date at day granularity as "2024-02-21"
///
/// Returns an empty string (and logs) when the input is absent or malformed.
pub fn convert_to_simple_date(date: Option<&str>, tz: RenderTimezone) -> String {
    match parse_date(date) {
        Some(dt) => render(dt, SIMPLE_DATE_FORMAT, tz),
        None => {
            log::error!("cannot format simple date from {:?}", date);
            String::new()
        }
    }
}

/// Format a date at second granularity as "21 Feb 2024 14:30:00"
///
/// Returns an empty string (and logs) when the input is absent or malformed.
pub fn convert_to_simple_date_time(date: Option<&str>, tz: RenderTimezone) -> String {
    match parse_date(date) {
        Some(dt) => render(dt, SIMPLE_DATE_TIME_FORMAT, tz),
        None => {
            log::error!("cannot format simple date-time from {:?}", date);
            String::new()
        }
    }
}

/// Format an instant given in epoch milliseconds as "February 21" (no year)
///
/// Returns `None` (and logs) when the millisecond value is outside the range
/// chrono can represent.
pub fn format_date_with_no_year(millis: i64, tz: RenderTimezone) -> Option<String> {
    match Utc.timestamp_millis_opt(millis).single() {
        Some(dt) => Some(render(dt, MONTH_DAY_FORMAT, tz)),
        None => {
            log::error!("timestamp out of range: {} ms", millis);
            None
        }
    }
}

/// Render a date string at second granularity and re-parse the result
///
/// This is the shared plumbing of [`is_date_past`] and [`is_date_due`]: both
/// sides of the comparison are squashed through [`SIMPLE_DATE_TIME_FORMAT`]
/// so sub-second precision is dropped before comparing.
fn to_second_precision(date: &str, tz: RenderTimezone) -> Result<NaiveDateTime, DateError> {
    let rendered = convert_to_simple_date_time(Some(date), tz);
    if rendered.is_empty() {
        return Err(DateError::InvalidDate(date.to_string()));
    }
    NaiveDateTime::parse_from_str(&rendered, SIMPLE_DATE_TIME_FORMAT)
        .map_err(|e| DateError::Reparse(rendered, e))
}

/// Whether `date` falls on the same calendar day as "now"
///
/// Compares the [`SIMPLE_DATE_FORMAT`] renderings of both sides as strings,
/// so the answer depends on the render timezone, not on any canonical
/// calendar. Unlike the formatters, a malformed `date` is an error here.
pub fn is_date_today(date: &str, tz: RenderTimezone) -> Result<bool, DateError> {
    let target = convert_to_simple_date(Some(date), tz);
    if target.is_empty() {
        return Err(DateError::InvalidDate(date.to_string()));
    }
    let today = convert_to_simple_date(Some(&now_timestamp()), tz);
    Ok(target == today)
}

/// Whether `date` is still ahead of "now", at second granularity
///
/// NOTE: the name is inverted relative to what it checks. Upstream callers
/// use `is_date_past(first) && is_date_due(last)` to mean "the window spans
/// now", so this returns `true` for dates in the *future*. The behavior is
/// kept verbatim; do not swap the comparison without auditing call sites.
pub fn is_date_past(date: &str, tz: RenderTimezone) -> Result<bool, DateError> {
    let now = to_second_precision(&now_timestamp(), tz)?;
    let target = to_second_precision(date, tz)?;
    Ok(now < target)
}

/// Whether `date` has already passed, at second granularity
///
/// Counterpart of [`is_date_past`] with the comparison reversed: `true` when
/// "now" is strictly later than `date`. The same naming inversion applies.
pub fn is_date_due(date: &str, tz: RenderTimezone) -> Result<bool, DateError> {
    let now = to_second_precision(&now_timestamp(), tz)?;
    let target = to_second_precision(date, tz)?;
    Ok(now > target)
}
