//! Current-conditions ingestion from the Open-Meteo API.
//!
//! This crate defines:
//! - Fetching one observation over HTTP ([`OpenMeteoFetcher`], [`fetch_blocking`])
//! - Normalizing raw responses into [`WeatherRecord`]s ([`parse`])
//! - Plausibility checks ([`validate()`]) and WMO code labels ([`describe()`])
//!
//! Every entry point is fail-soft: errors are logged through `tracing` and come
//! back as `None` (or `false`). The `try_*` variants expose the underlying
//! [`WeatherError`] for callers that want it.

pub mod config;
pub mod describe;
pub mod error;
pub mod model;
pub mod parse;
pub mod provider;
pub mod validate;

pub use config::FetchConfig;
pub use describe::describe;
pub use error::WeatherError;
pub use model::{RawCurrent, RawResponse, WeatherRecord};
pub use parse::{parse_response, parse_str, parse_value, try_parse_response};
pub use provider::openmeteo::{OpenMeteoFetcher, fetch_blocking};
pub use provider::{ReqwestTransport, Transport, TransportResponse};
pub use validate::validate;
