use crate::core::{ConfigProvider, GeocodeResult, GeocodingService, LatencyService, LatencyToken};
use crate::utils::error::{GeoError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// Provider statuses that count as a successful lookup.
const ACCEPTED_STATUSES: [&str; 2] = ["OK", "ZERO_RESULTS"];

#[derive(Debug, Clone)]
pub struct GoogleGeocoder {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GoogleGeocoder {
    pub fn new(client: Client, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(client: Client, config: &C) -> Self {
        Self::new(client, config.geocode_endpoint(), config.api_key())
    }
}

#[async_trait]
impl GeocodingService for GoogleGeocoder {
    async fn geocode(&self, address: &str) -> Result<GeocodeResult> {
        tracing::debug!("Making geocode request to: {} (address={:?})", self.endpoint, address);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| GeoError::GeocodeError {
                message: format!("request failed: {}", e),
            })?;

        let status = response.status();
        tracing::debug!("Geocode response status: {}", status);

        if !status.is_success() {
            return Err(GeoError::GeocodeError {
                message: format!("HTTP {}", status.as_u16()),
            });
        }

        let result: GeocodeResult = response.json().await.map_err(|e| GeoError::GeocodeError {
            message: format!("invalid response body: {}", e),
        })?;

        if !ACCEPTED_STATUSES.contains(&result.status.as_str()) {
            let message = match &result.error_message {
                Some(detail) => format!("{}: {}", result.status, detail),
                None => result.status.clone(),
            };
            return Err(GeoError::GeocodeError { message });
        }

        Ok(result)
    }
}

#[derive(Debug, Clone)]
pub struct HttpLatencyProbe {
    client: Client,
    url: String,
}

impl HttpLatencyProbe {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(client: Client, config: &C) -> Option<Self> {
        config.latency_url().map(|url| Self::new(client, url))
    }
}

#[async_trait]
impl LatencyService for HttpLatencyProbe {
    async fn wait(&self) -> Result<LatencyToken> {
        tracing::debug!("Waiting on latency endpoint: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(GeoError::RemoteTransportError)?;

        if response.status() != StatusCode::OK {
            return Err(GeoError::RemoteHttpError {
                status: response.status().as_u16(),
            });
        }

        // 等待完整回應內容
        let body = response
            .text()
            .await
            .map_err(GeoError::RemoteTransportError)?;

        Ok(LatencyToken(body))
    }
}
