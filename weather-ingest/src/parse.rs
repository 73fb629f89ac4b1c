//! Turning raw API responses into [`WeatherRecord`]s.
//!
//! Works on any response body, whether it just came off the wire or was read
//! back from a cache.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use tracing::warn;

use crate::error::WeatherError;
use crate::model::{RawCurrent, RawResponse, WeatherRecord};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse an ISO-8601 observation time. Open-Meteo sends `2025-01-28T10:00`
/// (local time in the requested timezone, no offset).
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, WeatherError> {
    let s = s.trim();

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    // Keep the wall time at the given offset, matching the offset-free form.
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }

    if let Some(midnight) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight);
    }

    Err(WeatherError::InvalidTimestamp(s.to_string()))
}

/// Assemble a record from a `current` block.
///
/// A missing `time` key falls back to the local wall clock. Note that this
/// makes `timestamp` indistinguishable from `fetch_time` for such records, so
/// the observation time is no longer trustworthy downstream. A `time` sent as
/// `null` is not missing and fails like any other unreadable value.
pub(crate) fn build_record(
    current: &RawCurrent,
    latitude: Option<f64>,
    longitude: Option<f64>,
    city: &str,
) -> Result<WeatherRecord, WeatherError> {
    let timestamp = match &current.time {
        Some(Some(time)) => parse_timestamp(time)?,
        Some(None) => return Err(WeatherError::InvalidTimestamp("null".to_string())),
        None => Local::now().naive_local(),
    };

    Ok(WeatherRecord {
        timestamp,
        latitude,
        longitude,
        temperature: current.temperature_2m.flatten(),
        humidity: current.relative_humidity_2m.flatten(),
        wind_speed: current.wind_speed_10m.flatten(),
        wind_direction: current.wind_direction_10m.flatten(),
        weather_code: current.weather_code.flatten(),
        city: city.to_string(),
        fetch_time: Utc::now(),
    })
}

/// Like [`parse_response`], but hands back the reason on failure.
pub fn try_parse_response(raw: &RawResponse, city: &str) -> Result<WeatherRecord, WeatherError> {
    let current = raw
        .current
        .as_ref()
        .and_then(Option::as_ref)
        .filter(|c| !c.is_empty())
        .ok_or(WeatherError::MissingCurrent)?;

    build_record(current, raw.latitude, raw.longitude, city)
}

/// Parse a decoded response into a record.
///
/// Coordinates come from the response itself and may be absent. Returns `None`
/// (after logging) if the response has no usable `current` block or its
/// observation time can't be read.
pub fn parse_response(raw: &RawResponse, city: &str) -> Option<WeatherRecord> {
    try_parse_response(raw, city)
        .inspect_err(|e| warn!(error = %e, city, "Error parsing weather response"))
        .ok()
}

/// Parse an arbitrary JSON value, e.g. one loaded from disk.
pub fn parse_value(value: serde_json::Value, city: &str) -> Option<WeatherRecord> {
    RawResponse::from_value(value)
        .and_then(|raw| try_parse_response(&raw, city))
        .inspect_err(|e| warn!(error = %e, city, "Error parsing weather response"))
        .ok()
}

/// Parse a JSON response body.
pub fn parse_str(body: &str, city: &str) -> Option<WeatherRecord> {
    RawResponse::from_json(body)
        .and_then(|raw| try_parse_response(&raw, city))
        .inspect_err(|e| warn!(error = %e, city, "Error parsing weather response"))
        .ok()
}
