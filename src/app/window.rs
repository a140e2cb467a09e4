//! Time-window policy for HAPI data requests
//!
//! HAPI data requests require an explicit `time.min`/`time.max` range. The
//! two functions here compute those bounds from a dataset's advertised
//! start/stop dates: a bounded preview window for sampling, and the full
//! advertised range. Arithmetic is on calendar days (14 days, not 14 times
//! 86400 seconds) and outputs are serialized back to ISO-8601 with second
//! precision and a trailing `Z`, which is what servers expect in query
//! parameters.

use chrono::{DateTime, Days, NaiveDate, SecondsFormat, Utc};

use crate::constants::hapi;
use crate::errors::{WindowError, WindowResult};

/// A bounded request window in HAPI query form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    /// Inclusive lower bound, ISO-8601 with trailing `Z`
    pub time_min: String,
    /// Exclusive upper bound, ISO-8601 with trailing `Z`
    pub time_max: String,
}

/// Compute the bounded preview window for a dataset
///
/// The window starts at the dataset's start date and extends 14 calendar
/// days, clipped to the stop date when the stop date is known and earlier.
///
/// # Errors
///
/// `MissingStartDate` when the dataset advertises no start date (a hard
/// precondition), `InvalidTimestamp` when an advertised date fails to parse.
pub fn preview_window(
    start_date: Option<&str>,
    stop_date: Option<&str>,
) -> WindowResult<TimeWindow> {
    let start_raw = non_empty(start_date).ok_or(WindowError::MissingStartDate)?;
    let start = parse_timestamp(start_raw)?;

    let mut end = start
        .checked_add_days(Days::new(hapi::PREVIEW_WINDOW_DAYS))
        .ok_or_else(|| WindowError::InvalidTimestamp {
            value: start_raw.to_string(),
        })?;

    if let Some(stop_raw) = non_empty(stop_date) {
        let stop = parse_timestamp(stop_raw)?;
        if stop < end {
            end = stop;
        }
    }

    Ok(TimeWindow {
        time_min: format_timestamp(start),
        time_max: format_timestamp(end),
    })
}

/// Compute the full advertised range of a dataset
///
/// # Errors
///
/// `MissingStartDate`/`MissingStopDate` when either bound is absent,
/// `InvalidTimestamp` when an advertised date fails to parse.
pub fn full_window(start_date: Option<&str>, stop_date: Option<&str>) -> WindowResult<TimeWindow> {
    let start_raw = non_empty(start_date).ok_or(WindowError::MissingStartDate)?;
    let stop_raw = non_empty(stop_date).ok_or(WindowError::MissingStopDate)?;

    let start = parse_timestamp(start_raw)?;
    let stop = parse_timestamp(stop_raw)?;

    Ok(TimeWindow {
        time_min: format_timestamp(start),
        time_max: format_timestamp(stop),
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse an advertised HAPI timestamp
///
/// Servers mostly emit full RFC 3339 timestamps; a few emit bare dates,
/// which are taken as midnight UTC.
fn parse_timestamp(value: &str) -> WindowResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc());
        }
    }

    Err(WindowError::InvalidTimestamp {
        value: value.to_string(),
    })
}

fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}
