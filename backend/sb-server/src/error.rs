use thiserror::Error;

/// Start-up failures. Request-time failures are `ApiError`.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] sb_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sb_db::DbError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] sb_catalog::CatalogError),

    #[error("Provider client error: {0}")]
    Feed(#[from] sb_feeds::FeedError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
