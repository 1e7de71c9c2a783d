use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::model::{WeatherEnvelope, WeatherReport};
use crate::source::{FetchError, WeatherSource};

/// Fixed current-conditions endpoint. No query parameters, no auth.
pub const WEATHER_ENDPOINT: &str =
    "https://raw.githubusercontent.com/Krishnarajsalim/JSON/refs/heads/main/weather.json";

/// reqwest-backed weather source.
///
/// One GET per call. No retries, no timeout override beyond the client
/// default, no caching of prior results.
#[derive(Debug, Clone)]
pub struct HttpWeatherSource {
    endpoint: String,
    http: Client,
}

impl HttpWeatherSource {
    pub fn new() -> Self {
        Self::with_endpoint(WEATHER_ENDPOINT)
    }

    /// Point the client at a different endpoint. Used by tests.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    async fn fetch_current(&self) -> Result<WeatherReport, FetchError> {
        let url = Url::parse(&self.endpoint).map_err(|_| FetchError::InvalidUrl)?;

        debug!(endpoint = %url, "fetching current conditions");

        let res = self.http.get(url).send().await?;

        if res.status() != StatusCode::OK {
            return Err(FetchError::InvalidResponse);
        }

        let body = res.text().await?;

        let envelope: WeatherEnvelope =
            serde_json::from_str(&body).map_err(FetchError::Decoding)?;

        let response = envelope.response;
        if !response.status {
            return Err(FetchError::Api(response.message));
        }

        Ok(response.result)
    }
}

impl Default for HttpWeatherSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherSource for HttpWeatherSource {
    async fn current(&self) -> Result<WeatherReport, FetchError> {
        self.fetch_current().await
    }
}
