use crate::domain::model::{GeocodeResult, LatencyToken};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn geocode_endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
    /// `None` when the latency step is disabled.
    fn latency_url(&self) -> Option<&str>;
}

#[async_trait]
pub trait GeocodingService: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<GeocodeResult>;
}

#[async_trait]
pub trait LatencyService: Send + Sync {
    async fn wait(&self) -> Result<LatencyToken>;
}
