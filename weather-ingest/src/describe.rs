//! WMO weather interpretation codes.
//!
//! See <https://open-meteo.com/en/docs#weathervariables>.

/// Known codes, sorted by code so lookups can binary search.
pub const WMO_DESCRIPTIONS: &[(i64, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (71, "Slight snow"),
    (73, "Moderate snow"),
    (75, "Heavy snow"),
    (77, "Snow grains"),
    (80, "Slight rain showers"),
    (81, "Moderate rain showers"),
    (82, "Violent rain showers"),
    (85, "Slight snow showers"),
    (86, "Heavy snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with slight hail"),
    (99, "Thunderstorm with heavy hail"),
];

pub const UNKNOWN: &str = "Unknown";

/// Map a WMO weather code to a short English description, or `"Unknown"`.
pub fn describe(code: i64) -> &'static str {
    WMO_DESCRIPTIONS
        .binary_search_by_key(&code, |&(c, _)| c)
        .map(|i| WMO_DESCRIPTIONS[i].1)
        .unwrap_or(UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        assert!(WMO_DESCRIPTIONS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn known_codes() {
        let cases = [
            (0, "Clear sky"),
            (1, "Mainly clear"),
            (2, "Partly cloudy"),
            (3, "Overcast"),
            (45, "Fog"),
            (48, "Depositing rime fog"),
            (51, "Light drizzle"),
            (53, "Moderate drizzle"),
            (55, "Dense drizzle"),
            (61, "Slight rain"),
            (63, "Moderate rain"),
            (65, "Heavy rain"),
            (71, "Slight snow"),
            (73, "Moderate snow"),
            (75, "Heavy snow"),
            (77, "Snow grains"),
            (80, "Slight rain showers"),
            (81, "Moderate rain showers"),
            (82, "Violent rain showers"),
            (85, "Slight snow showers"),
            (86, "Heavy snow showers"),
            (95, "Thunderstorm"),
            (96, "Thunderstorm with slight hail"),
            (99, "Thunderstorm with heavy hail"),
        ];
        assert_eq!(cases.len(), WMO_DESCRIPTIONS.len());
        for (code, expected) in cases {
            assert_eq!(describe(code), expected, "code {code}");
        }
    }

    #[test]
    fn winter_codes() {
        assert_eq!(describe(71), "Slight snow");
        assert_eq!(describe(73), "Moderate snow");
        assert_eq!(describe(75), "Heavy snow");
        assert_eq!(describe(77), "Snow grains");
    }

    #[test]
    fn unmapped_codes_are_unknown() {
        for code in [-1, 4, 44, 56, 66, 100, 999, i64::MIN, i64::MAX] {
            assert_eq!(describe(code), "Unknown", "code {code}");
        }
    }
}
