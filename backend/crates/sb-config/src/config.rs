use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, CatalogConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, ProvidersConfig, ServerConfig,
    ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub catalog: CatalogConfig,
    pub providers: ProvidersConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load config from disk and environment.
    ///
    /// Loading order:
    /// 1. Check for SB_CONFIG_DIR env var, else use ./.sb/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SB_CONFIG_DIR env var > ./.sb/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.providers.validate()?;
        self.validation.validate()?;
        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Log file path, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  auth: HS256 (secret {}), ttl={}d",
            Self::presence(&self.auth.jwt_secret),
            self.auth.token_ttl_days
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  catalog: matches={}, stadiums={}",
            self.catalog.matches_file.display(),
            self.catalog.stadiums_dir.display()
        );
        info!(
            "  providers: weather key {}, traffic key {}, timeout={}s",
            Self::presence(&self.providers.weather_api_key),
            Self::presence(&self.providers.traffic_api_key),
            self.providers.timeout_secs
        );
        info!(
            "  validation: email={}, password={}, schedule_name={}, match_ids={}",
            self.validation.max_email_length,
            self.validation.max_password_length,
            self.validation.max_schedule_name_length,
            self.validation.max_match_ids
        );
    }

    fn presence(value: &Option<String>) -> &'static str {
        if value.is_some() { "set" } else { "not set" }
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("SB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("SB_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("SB_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("SB_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("SB_AUTH_TOKEN_TTL_DAYS", &mut self.auth.token_ttl_days);

        // Logging
        Self::apply_env_parse("SB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SB_LOG_FILE", &mut self.logging.file);

        // Catalog
        Self::apply_env_parse("SB_CATALOG_MATCHES_FILE", &mut self.catalog.matches_file);
        Self::apply_env_parse("SB_CATALOG_STADIUMS_DIR", &mut self.catalog.stadiums_dir);

        // Providers; the unprefixed names are what existing deployments already export
        Self::apply_env_option_string("OPENWEATHER_API_KEY", &mut self.providers.weather_api_key);
        Self::apply_env_option_string(
            "SB_PROVIDERS_WEATHER_API_KEY",
            &mut self.providers.weather_api_key,
        );
        Self::apply_env_string(
            "SB_PROVIDERS_WEATHER_BASE_URL",
            &mut self.providers.weather_base_url,
        );
        Self::apply_env_option_string("GOOGLE_MAPS_API_KEY", &mut self.providers.traffic_api_key);
        Self::apply_env_option_string(
            "SB_PROVIDERS_TRAFFIC_API_KEY",
            &mut self.providers.traffic_api_key,
        );
        Self::apply_env_string(
            "SB_PROVIDERS_TRAFFIC_BASE_URL",
            &mut self.providers.traffic_base_url,
        );
        Self::apply_env_parse(
            "SB_PROVIDERS_TIMEOUT_SECS",
            &mut self.providers.timeout_secs,
        );

        // Validation
        Self::apply_env_parse(
            "SB_VALIDATION_MAX_EMAIL_LENGTH",
            &mut self.validation.max_email_length,
        );
        Self::apply_env_parse(
            "SB_VALIDATION_MAX_PASSWORD_LENGTH",
            &mut self.validation.max_password_length,
        );
        Self::apply_env_parse(
            "SB_VALIDATION_MAX_SCHEDULE_NAME_LENGTH",
            &mut self.validation.max_schedule_name_length,
        );
        Self::apply_env_parse(
            "SB_VALIDATION_MAX_MATCH_IDS",
            &mut self.validation.max_match_ids,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values.
    /// Empty values are ignored so an unset-but-exported key does not count as configured.
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name)
            && !val.is_empty()
        {
            *target = Some(val);
        }
    }
}
