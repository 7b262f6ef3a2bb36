use crate::error::{Result as ServerErrorResult, ServerError};

use sb_auth::TokenService;
use sb_catalog::Catalog;
use sb_config::{AuthConfig, Config, ConfigError, ValidationConfig};
use sb_db::Database;
use sb_feeds::{CrowdForecaster, TrafficService, WeatherService, build_http_client};

use std::sync::Arc;

use log::info;
use sqlx::SqlitePool;

/// Shared, cheaply cloneable state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub token_service: Arc<TokenService>,
    pub catalog: Arc<Catalog>,
    pub weather: Arc<WeatherService>,
    pub traffic: Arc<TrafficService>,
    pub crowds: CrowdForecaster,
    pub validation: ValidationConfig,
}

impl AppState {
    /// Open the database, load the catalog and build the provider clients.
    /// Expects a validated config.
    pub async fn from_config(config: &Config) -> ServerErrorResult<Self> {
        let token_service = token_service(&config.auth)?;
        info!(
            "Token service: {} ({}d tokens)",
            token_service.algorithm(),
            config.auth.token_ttl_days
        );

        let database_path = config.database_path()?;
        info!("Connecting to database: {}", database_path.display());
        let pool = Database::connect(&database_path).await?;

        let catalog = Catalog::load(&config.catalog.matches_file, &config.catalog.stadiums_dir)?;

        let client = build_http_client(config.providers.timeout()).map_err(ServerError::from)?;
        let weather = WeatherService::new(
            client.clone(),
            config.providers.weather_api_key.clone(),
            config.providers.weather_base_url.clone(),
        );
        let traffic = TrafficService::new(
            client,
            config.providers.traffic_api_key.clone(),
            config.providers.traffic_base_url.clone(),
        );
        if !weather.is_configured() {
            info!("Weather API key not set, weather endpoints serve fallback data");
        }
        if !traffic.is_configured() {
            info!("Traffic API key not set, traffic endpoints serve fallback data");
        }

        Ok(Self {
            pool,
            token_service: Arc::new(token_service),
            catalog: Arc::new(catalog),
            weather: Arc::new(weather),
            traffic: Arc::new(traffic),
            crowds: CrowdForecaster::new(),
            validation: config.validation.clone(),
        })
    }
}

/// Token service signing with the configured secret and lifetime
pub(crate) fn token_service(auth: &AuthConfig) -> ServerErrorResult<TokenService> {
    let secret = auth
        .jwt_secret
        .as_deref()
        .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))?;

    Ok(TokenService::with_hs256(
        secret.as_bytes(),
        chrono::Duration::days(auth.token_ttl_days),
    ))
}
