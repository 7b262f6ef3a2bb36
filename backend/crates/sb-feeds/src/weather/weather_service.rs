use super::openweather::{CurrentResponse, ForecastResponse};
use crate::http::{get_json, provider_url, redact};
use crate::{Coordinates, FeedError, Result as FeedResult, WeatherReport};

use chrono::Utc;
use log::{debug, warn};
use reqwest::Client;

const PROVIDER: &str = "OpenWeatherMap";
const UNITS: &str = "imperial";

/// OpenWeatherMap client with a constant fallback report
#[derive(Debug, Clone)]
pub struct WeatherService {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl WeatherService {
    pub fn new(client: Client, api_key: Option<String>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            api_key: api_key.filter(|key| !key.is_empty()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Current conditions at `coords`.
    pub async fn current(&self, coords: Coordinates) -> WeatherReport {
        match self.fetch_current(coords).await {
            Ok(report) => report,
            Err(e) => self.fall_back("current weather", e),
        }
    }

    /// Nearest forecast slot for `coords`.
    pub async fn forecast(&self, coords: Coordinates) -> WeatherReport {
        match self.fetch_forecast(coords).await {
            Ok(report) => report,
            Err(e) => self.fall_back("forecast", e),
        }
    }

    async fn fetch_current(&self, coords: Coordinates) -> FeedResult<WeatherReport> {
        let url = self.endpoint("weather", coords)?;
        let body: CurrentResponse = get_json(&self.client, url).await?;
        body.into_report(Utc::now())
            .ok_or_else(|| FeedError::upstream(PROVIDER, "response has no weather entry"))
    }

    async fn fetch_forecast(&self, coords: Coordinates) -> FeedResult<WeatherReport> {
        let url = self.endpoint("forecast", coords)?;
        let body: ForecastResponse = get_json(&self.client, url).await?;
        body.list
            .into_iter()
            .next()
            .and_then(|entry| entry.into_report(Utc::now()))
            .ok_or_else(|| FeedError::upstream(PROVIDER, "forecast list is empty"))
    }

    fn endpoint(&self, resource: &str, coords: Coordinates) -> FeedResult<reqwest::Url> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| FeedError::missing_api_key(PROVIDER))?;

        provider_url(
            &format!("{}/{}", self.base_url, resource),
            &[
                ("lat", coords.lat.to_string()),
                ("lon", coords.lon.to_string()),
                ("appid", api_key.to_string()),
                ("units", UNITS.to_string()),
            ],
        )
    }

    fn fall_back(&self, what: &str, error: FeedError) -> WeatherReport {
        match error {
            FeedError::MissingApiKey { .. } => {
                debug!("No weather API key, serving fallback {}", what)
            }
            // The message may embed the request URL, which carries the key
            other => warn!(
                "Weather provider failed for {}, serving fallback: {}",
                what,
                redact(&other.to_string(), self.api_key.as_deref())
            ),
        }
        WeatherReport::fallback(Utc::now())
    }
}
