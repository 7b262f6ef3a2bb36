mod auth_config;
mod catalog_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod providers_config;
mod server_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use catalog_config::CatalogConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use providers_config::ProvidersConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "SB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".sb";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "schedule_builder.db";

pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;
const MIN_TOKEN_TTL_DAYS: i64 = 1;
const MAX_TOKEN_TTL_DAYS: i64 = 90;
const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_MATCHES_FILE: &str = "match_data/fifa_2026_matches.json";
const DEFAULT_STADIUMS_DIR: &str = "stadium_data";

const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const DEFAULT_TRAFFIC_BASE_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 5;
const MIN_PROVIDER_TIMEOUT_SECS: u64 = 1;
const MAX_PROVIDER_TIMEOUT_SECS: u64 = 60;
