use crate::core::{
    GeocodeQuery, GeocodingService, HandlerResponse, LatencyService, Outcome, RequestState,
};
use crate::utils::error::Result;

/// Geocoding request handler.
///
/// Runs the optional latency call, then the geocoding call, strictly in that
/// order. Every failure collapses into the same 500 response; the cause is
/// only logged.
pub struct RequestHandler<G: GeocodingService, L: LatencyService> {
    geocoder: G,
    latency: Option<L>,
}

impl<G: GeocodingService, L: LatencyService> RequestHandler<G, L> {
    pub fn new(geocoder: G, latency: Option<L>) -> Self {
        Self { geocoder, latency }
    }

    pub fn latency_enabled(&self) -> bool {
        self.latency.is_some()
    }

    pub async fn handle(&self, query: &GeocodeQuery) -> HandlerResponse {
        transition(query, RequestState::Received);

        match self.lookup(query).await {
            Ok(results) => {
                transition(query, RequestState::Responded(Outcome::Success));
                HandlerResponse::success(results)
            }
            Err(e) => {
                tracing::error!(
                    "❌ Lookup failed for city={:?} state={:?}: {} (Category: {:?})",
                    query.city,
                    query.state,
                    e.detailed_message(),
                    e.category()
                );
                transition(query, RequestState::Responded(Outcome::Failure));
                HandlerResponse::failure()
            }
        }
    }

    async fn lookup(&self, query: &GeocodeQuery) -> Result<serde_json::Value> {
        if let Some(latency) = &self.latency {
            transition(query, RequestState::AwaitingLatency);
            let token = latency.wait().await?;
            tracing::debug!("Latency call resolved ({} bytes)", token.0.len());
        }

        transition(query, RequestState::AwaitingGeocode);
        let address = query.address();
        let result = self.geocoder.geocode(&address).await?;
        tracing::debug!("Geocode status for {:?}: {}", address, result.status);

        Ok(result.results)
    }
}

fn transition(query: &GeocodeQuery, next: RequestState) {
    tracing::debug!(city = %query.city, state = %query.state, "→ {}", next);
}
