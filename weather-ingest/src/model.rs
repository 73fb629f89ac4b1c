use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

use crate::describe::describe;
use crate::error::WeatherError;

/// Body of an Open-Meteo `/v1/forecast` response, as far as this crate cares.
///
/// Every field is optional: partial responses (or hand-built fixtures read from
/// a cache) still deserialize, and it is up to the parser to decide what is
/// usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawResponse {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub timezone: Option<String>,
    /// Outer `None`: key missing. `Some(None)`: `"current": null`.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub current: Option<Option<RawCurrent>>,
}

impl RawResponse {
    /// Decode a response body. Fails if the body is not a JSON object of the expected shape.
    pub fn from_json(body: &str) -> Result<Self, WeatherError> {
        Self::from_value(serde_json::from_str(body)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, WeatherError> {
        // Derived struct impls also accept arrays; responses are always objects.
        if !value.is_object() {
            return Err(WeatherError::Json(serde::de::Error::custom(
                "expected a JSON object at the top level",
            )));
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// The `current` block of a response.
///
/// Each field keeps whether its key was sent at all: outer `None` means the key
/// was missing, `Some(None)` means it was sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCurrent {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub time: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub temperature_2m: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present_int", skip_serializing_if = "Option::is_none")]
    pub relative_humidity_2m: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub wind_speed_10m: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present_int", skip_serializing_if = "Option::is_none")]
    pub wind_direction_10m: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present_int", skip_serializing_if = "Option::is_none")]
    pub weather_code: Option<Option<i64>>,

    /// Keys we don't model (`interval`, extra metrics, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl RawCurrent {
    /// True when the block carried no keys at all. A key sent as `null` still counts.
    pub fn is_empty(&self) -> bool {
        self.time.is_none()
            && self.temperature_2m.is_none()
            && self.relative_humidity_2m.is_none()
            && self.wind_speed_10m.is_none()
            && self.wind_direction_10m.is_none()
            && self.weather_code.is_none()
            && self.extra.is_empty()
    }
}

/// Only called when the key is present, so wrap whatever was there (including `null`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Like [`present`], but also takes integral floats such as `72.0`.
fn present_int<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(n) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(Some(None));
    };

    let int = n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    });

    int.map(|i| Some(Some(i)))
        .ok_or_else(|| D::Error::custom(format!("expected an integer, found {n}")))
}

/// A normalized weather observation for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Observation time as reported by the API, in the requested timezone.
    pub timestamp: NaiveDateTime,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Degrees Celsius.
    pub temperature: Option<f64>,
    /// Relative humidity, percent.
    pub humidity: Option<i64>,
    pub wind_speed: Option<f64>,
    /// Degrees.
    pub wind_direction: Option<i64>,
    /// WMO weather interpretation code.
    pub weather_code: Option<i64>,
    /// Free-text label; never checked against the coordinates.
    pub city: String,
    /// When this record was assembled, as opposed to when it was observed.
    pub fetch_time: DateTime<Utc>,
}

impl WeatherRecord {
    pub fn is_valid(&self) -> bool {
        crate::validate::validate(Some(self))
    }

    /// Human-readable label for the record's weather code, if it has one.
    pub fn description(&self) -> Option<&'static str> {
        self.weather_code.map(describe)
    }
}
