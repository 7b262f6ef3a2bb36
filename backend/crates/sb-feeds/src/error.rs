use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid provider URL: {message} {location}")]
    InvalidUrl {
        message: String,
        location: ErrorLocation,
    },

    #[error("{provider} returned no usable data: {message} {location}")]
    Upstream {
        provider: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("{provider} API key not configured {location}")]
    MissingApiKey {
        provider: &'static str,
        location: ErrorLocation,
    },
}

impl FeedError {
    #[track_caller]
    pub(crate) fn upstream<S: Into<String>>(provider: &'static str, message: S) -> Self {
        FeedError::Upstream {
            provider,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn missing_api_key(provider: &'static str) -> Self {
        FeedError::MissingApiKey {
            provider,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn invalid_url<S: Into<String>>(message: S) -> Self {
        FeedError::InvalidUrl {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for FeedError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        FeedError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
