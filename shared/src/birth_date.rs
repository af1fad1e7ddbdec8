//! Conversions between the birth date as shown in a `date` input
//! (`YYYY-MM-DD`) and the timestamp the profile service stores.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use crate::error::{Result, SharedError};

const DISPLAY_FORMAT: &str = "%Y-%m-%d";

/// Normalizes a stored birth date into the `YYYY-MM-DD` form used by the
/// date input. Timestamps are converted to UTC before the time of day is
/// dropped. An empty value stays empty.
pub fn to_display_date(raw: &str) -> Result<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(String::new());
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc).date_naive().format(DISPLAY_FORMAT).to_string());
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, DISPLAY_FORMAT) {
        return Ok(date.format(DISPLAY_FORMAT).to_string());
    }

    // Offset-less timestamps are read as UTC
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.date().format(DISPLAY_FORMAT).to_string());
    }

    Err(SharedError::InvalidDate(raw.to_string()))
}

/// Same as [`to_display_date`] for a birth date stored as milliseconds
/// since the Unix epoch.
pub fn from_epoch_millis(millis: i64) -> Result<String> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|ts| ts.date_naive().format(DISPLAY_FORMAT).to_string())
        .ok_or_else(|| SharedError::InvalidDate(millis.to_string()))
}

/// Expands a `YYYY-MM-DD` date into a UTC midnight timestamp with
/// millisecond precision, e.g. `1990-05-14T00:00:00.000Z`.
pub fn to_timestamp(display: &str) -> Result<String> {
    let display = display.trim();
    let date = NaiveDate::parse_from_str(display, DISPLAY_FORMAT)
        .map_err(|_| SharedError::InvalidDate(display.to_string()))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| SharedError::InvalidDate(display.to_string()))?;

    Ok(midnight.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true))
}
