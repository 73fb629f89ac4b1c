use thiserror::Error;

/// Everything that can go wrong between sending the request and holding a record.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Network unreachable, connection refused, timeout.
    #[error("Request to weather API failed: {0}")]
    Transport(String),

    #[error("Weather API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse weather API JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Weather API response contained no current observations")]
    MissingCurrent,

    #[error("Invalid observation time '{0}'")]
    InvalidTimestamp(String),

    #[error("Failed to start blocking runtime: {0}")]
    Runtime(String),
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
