use super::distance_matrix::DistanceMatrixResponse;
use crate::http::{get_json, provider_url, redact};
use crate::{
    Coordinates, FeedError, OriginEstimate, Result as FeedResult, TravelEstimate, TravelMode,
};

use chrono::Utc;
use log::{debug, warn};
use reqwest::Client;

const PROVIDER: &str = "Google Distance Matrix";

/// Travel-time lookups with a constant fallback estimate
#[derive(Debug, Clone)]
pub struct TrafficService {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl TrafficService {
    pub fn new(client: Client, api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.filter(|key| !key.is_empty()),
            base_url: base_url.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn travel_time(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        mode: TravelMode,
    ) -> TravelEstimate {
        match self.fetch(origin, destination, mode).await {
            Ok(estimate) => estimate,
            Err(FeedError::MissingApiKey { .. }) => {
                debug!("No traffic API key, serving fallback estimate");
                TravelEstimate::fallback(Utc::now())
            }
            Err(e) => {
                warn!(
                    "Traffic provider failed, serving fallback: {}",
                    redact(&e.to_string(), self.api_key.as_deref())
                );
                TravelEstimate::fallback(Utc::now())
            }
        }
    }

    /// Driving estimates from each origin to `destination`, in input order.
    pub async fn stadium_traffic(
        &self,
        destination: Coordinates,
        origins: &[Coordinates],
    ) -> Vec<OriginEstimate> {
        let mut estimates = Vec::with_capacity(origins.len());
        for &origin in origins {
            let estimate = self
                .travel_time(origin, destination, TravelMode::Driving)
                .await;
            estimates.push(OriginEstimate { origin, estimate });
        }
        estimates
    }

    async fn fetch(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        mode: TravelMode,
    ) -> FeedResult<TravelEstimate> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| FeedError::missing_api_key(PROVIDER))?;

        let url = provider_url(
            &self.base_url,
            &[
                ("origins", origin.as_query_value()),
                ("destinations", destination.as_query_value()),
                ("mode", mode.as_str().to_string()),
                ("departure_time", "now".to_string()),
                ("traffic_model", "best_guess".to_string()),
                ("key", api_key.to_string()),
            ],
        )?;

        let body: DistanceMatrixResponse = get_json(&self.client, url).await?;
        let measurements = body.first_measurements().ok_or_else(|| {
            FeedError::upstream(PROVIDER, format!("no OK element (status {})", body.status))
        })?;

        Ok(TravelEstimate::from_measurements(
            measurements.distance_meters,
            measurements.duration_secs,
            measurements.duration_in_traffic_secs,
            mode,
            Utc::now(),
        ))
    }
}
