use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::WeatherReport;

pub mod http;

pub use http::{HttpWeatherSource, WEATHER_ENDPOINT};

/// Failure taxonomy for one fetch round trip.
///
/// Everything the transport or the service can do wrong collapses into one
/// of these five cases at the client boundary; nothing propagates past it.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The fixed endpoint constant failed to parse. Practically
    /// unreachable, but kept as a distinct outcome.
    #[error("invalid weather endpoint URL")]
    InvalidUrl,

    /// Transport succeeded but the status code was not 200.
    #[error("invalid response from server")]
    InvalidResponse,

    /// The body was not the expected JSON shape.
    #[error("failed to decode weather payload")]
    Decoding(#[source] serde_json::Error),

    /// The payload decoded but its own status flag was false. Carries the
    /// server-supplied message verbatim.
    #[error("{0}")]
    Api(String),

    /// Any transport-level fault before a usable response, carrying the
    /// underlying fault's description.
    #[error("{0}")]
    Unknown(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Unknown(err.to_string())
    }
}

/// Anything that can produce a current-conditions report.
///
/// The HTTP client is the only production implementation; tests substitute
/// doubles with controlled completion order.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn current(&self) -> Result<WeatherReport, FetchError>;
}
