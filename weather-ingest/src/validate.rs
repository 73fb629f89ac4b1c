use std::ops::RangeInclusive;

use crate::model::WeatherRecord;

pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;
/// Plausible surface air temperature, °C.
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = -100.0..=60.0;

/// Check that a record has its required fields and physically plausible values.
///
/// Required: timestamp, latitude, longitude, temperature, city. `timestamp` and
/// `city` can't be absent on a constructed record, so only the optional ones
/// are inspected. Humidity, wind and weather code are never checked.
pub fn validate(record: Option<&WeatherRecord>) -> bool {
    let Some(record) = record else {
        return false;
    };

    let (Some(latitude), Some(longitude), Some(temperature)) =
        (record.latitude, record.longitude, record.temperature)
    else {
        return false;
    };

    // NaN fails `contains`, which is what we want.
    LATITUDE_RANGE.contains(&latitude)
        && LONGITUDE_RANGE.contains(&longitude)
        && TEMPERATURE_RANGE.contains(&temperature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn valid_record() -> WeatherRecord {
        WeatherRecord {
            timestamp: NaiveDate::from_ymd_opt(2025, 1, 28)
                .and_then(|d| d.and_hms_opt(10, 0, 0))
                .unwrap(),
            latitude: Some(51.0447),
            longitude: Some(-114.0719),
            temperature: Some(-5.2),
            humidity: Some(72),
            wind_speed: Some(15.5),
            wind_direction: Some(270),
            weather_code: Some(3),
            city: "Calgary".into(),
            fetch_time: Utc::now(),
        }
    }

    #[test]
    fn valid_record_passes() {
        assert!(validate(Some(&valid_record())));
        assert!(valid_record().is_valid());
    }

    #[test]
    fn absent_record_fails() {
        assert!(!validate(None));
    }

    #[test]
    fn missing_required_field_fails() {
        let mut r = valid_record();
        r.temperature = None;
        assert!(!validate(Some(&r)));

        let mut r = valid_record();
        r.latitude = None;
        assert!(!validate(Some(&r)));

        let mut r = valid_record();
        r.longitude = None;
        assert!(!validate(Some(&r)));
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let mut r = valid_record();
        r.humidity = None;
        r.wind_speed = None;
        r.wind_direction = None;
        r.weather_code = None;
        assert!(validate(Some(&r)));
    }

    #[test]
    fn latitude_bounds() {
        let mut r = valid_record();
        for lat in [-90.0, -45.5, 0.0, 90.0] {
            r.latitude = Some(lat);
            assert!(validate(Some(&r)), "lat {lat}");
        }
        for lat in [-100.0, -90.000_001, 90.000_001, 100.0] {
            r.latitude = Some(lat);
            assert!(!validate(Some(&r)), "lat {lat}");
        }
    }

    #[test]
    fn longitude_bounds() {
        let mut r = valid_record();
        for lon in [-180.0, 0.0, 180.0] {
            r.longitude = Some(lon);
            assert!(validate(Some(&r)), "lon {lon}");
        }
        for lon in [-200.0, -180.5, 180.5, 200.0] {
            r.longitude = Some(lon);
            assert!(!validate(Some(&r)), "lon {lon}");
        }
    }

    #[test]
    fn extreme_corners_are_valid() {
        let mut r = valid_record();
        r.latitude = Some(90.0);
        r.longitude = Some(180.0);
        assert!(validate(Some(&r)));

        r.latitude = Some(-90.0);
        r.longitude = Some(-180.0);
        assert!(validate(Some(&r)));
    }

    #[test]
    fn temperature_bounds() {
        let mut r = valid_record();
        for t in [-100.0, -40.0, 0.0, 60.0] {
            r.temperature = Some(t);
            assert!(validate(Some(&r)), "temp {t}");
        }
        for t in [-150.0, -100.1, 60.1, 100.0] {
            r.temperature = Some(t);
            assert!(!validate(Some(&r)), "temp {t}");
        }
    }

    #[test]
    fn nan_is_out_of_range() {
        let mut r = valid_record();
        r.temperature = Some(f64::NAN);
        assert!(!validate(Some(&r)));
    }
}
