// src/utils/http.rs

//! HTTP client utilities.

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, REFERER};

use crate::error::{AppError, Result};
use crate::models::HotListConfig;

/// Create an asynchronous HTTP client carrying the fixed request headers.
///
/// The client keeps no idle connections, so every request opens its own.
/// The User-Agent is set per request.
pub fn create_async_client(config: &HotListConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .default_headers(default_headers(config)?)
        .pool_max_idle_per_host(0)
        .build()?;
    Ok(client)
}

fn default_headers(config: &HotListConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        ACCEPT_LANGUAGE,
        header_value("accept_language", &config.accept_language)?,
    );
    headers.insert(REFERER, header_value("referer", &config.referer)?);
    Ok(headers)
}

fn header_value(field: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| AppError::validation(format!("{field} is not a valid header value: {e}")))
}
