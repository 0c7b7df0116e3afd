// Adapters layer: concrete implementations for external systems (http collaborators, lambda runtime).

pub mod http;

#[cfg(feature = "lambda")]
pub mod lambda;

use crate::config::ServiceConfig;
use crate::core::handler::RequestHandler;
use self::http::{GoogleGeocoder, HttpLatencyProbe};

pub type GeoHandler = RequestHandler<GoogleGeocoder, HttpLatencyProbe>;

/// Wires the reqwest-backed collaborators into a handler. One client is shared by both.
pub fn build_handler(config: &ServiceConfig) -> GeoHandler {
    let client = reqwest::Client::new();
    let geocoder = GoogleGeocoder::from_config(client.clone(), config);
    let latency = HttpLatencyProbe::from_config(client, config);
    RequestHandler::new(geocoder, latency)
}
