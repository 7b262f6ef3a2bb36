use crate::{FeedError, Result as FeedResult};

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

/// Shared HTTP client for every provider, bounded by `timeout`.
pub fn build_http_client(timeout: Duration) -> FeedResult<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}

pub(crate) fn provider_url(base: &str, params: &[(&str, String)]) -> FeedResult<Url> {
    Url::parse_with_params(base, params).map_err(|e| FeedError::invalid_url(format!("{base}: {e}")))
}

pub(crate) async fn get_json<T: DeserializeOwned>(client: &Client, url: Url) -> FeedResult<T> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.json::<T>().await?)
}

/// Strip an API key out of an error message before it is logged.
pub(crate) fn redact(message: &str, secret: Option<&str>) -> String {
    match secret {
        Some(secret) if !secret.is_empty() => message.replace(secret, "<redacted>"),
        _ => message.to_string(),
    }
}
