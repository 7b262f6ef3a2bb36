use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_PROVIDER_TIMEOUT_SECS, DEFAULT_TRAFFIC_BASE_URL,
    DEFAULT_WEATHER_BASE_URL, MAX_PROVIDER_TIMEOUT_SECS, MIN_PROVIDER_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Third-party weather and traffic endpoints.
///
/// A missing API key is not an error: the corresponding service answers
/// with its fallback data.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub weather_api_key: Option<String>,
    pub weather_base_url: String,
    pub traffic_api_key: Option<String>,
    pub traffic_base_url: String,
    pub timeout_secs: u64,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            weather_api_key: None,
            weather_base_url: String::from(DEFAULT_WEATHER_BASE_URL),
            traffic_api_key: None,
            traffic_base_url: String::from(DEFAULT_TRAFFIC_BASE_URL),
            timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for ProvidersConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvidersConfig")
            .field(
                "weather_api_key",
                &self.weather_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("weather_base_url", &self.weather_base_url)
            .field(
                "traffic_api_key",
                &self.traffic_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("traffic_base_url", &self.traffic_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ProvidersConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.timeout_secs < MIN_PROVIDER_TIMEOUT_SECS
            || self.timeout_secs > MAX_PROVIDER_TIMEOUT_SECS
        {
            return Err(ConfigError::providers(format!(
                "providers.timeout_secs must be {}-{}, got {}",
                MIN_PROVIDER_TIMEOUT_SECS, MAX_PROVIDER_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        for (name, url) in [
            ("weather_base_url", &self.weather_base_url),
            ("traffic_base_url", &self.traffic_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::providers(format!(
                    "providers.{} must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
