use tracing::{debug, instrument, warn};

use crate::{
    config::FetchConfig,
    error::WeatherError,
    model::{RawCurrent, RawResponse, WeatherRecord},
    parse::build_record,
};

use super::{ReqwestTransport, Transport};

/// Fetches current conditions from the Open-Meteo forecast endpoint.
#[derive(Debug, Clone, Default)]
pub struct OpenMeteoFetcher<T = ReqwestTransport> {
    transport: T,
}

impl OpenMeteoFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Transport> OpenMeteoFetcher<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// One GET against `config.api_url`, normalized into a record.
    ///
    /// Unlike [`crate::parse::parse_response`], the record carries the
    /// *requested* coordinates, and a response without a `current` key still
    /// yields a record (all observations absent). `"current": null` does not.
    #[instrument(
        skip(self, config),
        fields(city = %config.city, lat = %config.latitude, lon = %config.longitude)
    )]
    pub async fn try_fetch(&self, config: &FetchConfig) -> Result<WeatherRecord, WeatherError> {
        debug!(url = %config.api_url, "Fetching current weather");

        let res = self.transport.get(&config.api_url, &config.query(), config.timeout()).await?;

        if !res.is_success() {
            return Err(WeatherError::Status {
                status: res.status,
                body: truncate_body(&res.body),
            });
        }

        let raw = RawResponse::from_json(&res.body)?;
        let current = match raw.current {
            None => RawCurrent::default(),
            Some(None) => return Err(WeatherError::MissingCurrent),
            Some(Some(current)) => current,
        };

        build_record(&current, Some(config.latitude), Some(config.longitude), &config.city)
    }

    /// Like [`Self::try_fetch`], but failures are logged and reported as `None`.
    pub async fn fetch(&self, config: &FetchConfig) -> Option<WeatherRecord> {
        match self.try_fetch(config).await {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(error = %e, city = %config.city, "Error fetching weather data");
                None
            }
        }
    }
}

/// Fetch on the calling thread, blocking until the request completes or times out.
///
/// Returns `None` without fetching when called from inside a Tokio runtime;
/// async callers should use [`OpenMeteoFetcher::fetch`].
pub fn fetch_blocking(config: &FetchConfig) -> Option<WeatherRecord> {
    if tokio::runtime::Handle::try_current().is_ok() {
        let err = WeatherError::Runtime("fetch_blocking called from within an async runtime".into());
        warn!(error = %err, "Error fetching weather data");
        return None;
    }

    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            warn!(error = %WeatherError::Runtime(e.to_string()), "Error fetching weather data");
            return None;
        }
    };

    rt.block_on(OpenMeteoFetcher::new().fetch(config))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
