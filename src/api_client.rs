//! REST client for the discover endpoint.

use crate::config::TuiConfig;
use crate::types::{DiscoverEnvelope, PostRecord};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
    #[error("Config error: {0}")]
    Config(String),
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    headers: HeaderMap,
}

impl ApiClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let headers = build_headers(config)?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            headers,
        })
    }

    /// Fetch the full discover list.
    ///
    /// The response body is an envelope wrapping the list under
    /// `data.listData`; the extracted list replaces the in-memory state
    /// wholesale on the caller's side.
    pub async fn fetch_discover_list(&self) -> Result<Vec<PostRecord>, ApiClientError> {
        let url = format!("{}/user/discover", self.base_url);
        let response = self
            .client
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(status_error(status, &text));
        }
        let envelope = response.json::<DiscoverEnvelope>().await?;
        Ok(envelope.data.list_data)
    }

    /// Delete a post by its server-assigned identifier.
    pub async fn delete_post(&self, id: &str) -> Result<(), ApiClientError> {
        let url = format!("{}/user/{}", self.base_url, id);
        let response = self
            .client
            .delete(url)
            .headers(self.headers.clone())
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(status_error(status, &text));
        }
        Ok(())
    }
}

fn status_error(status: reqwest::StatusCode, body: &str) -> ApiClientError {
    let reason = if body.trim().is_empty() {
        status.canonical_reason().unwrap_or("request failed")
    } else {
        body.trim()
    };
    ApiClientError::InvalidResponse(format!("HTTP {}: {}", status.as_u16(), reason))
}

fn build_headers(config: &TuiConfig) -> Result<HeaderMap, ApiClientError> {
    let mut headers = HeaderMap::new();
    if let Some(api_key) = &config.auth.api_key {
        headers.insert(
            HeaderName::from_static("x-api-key"),
            HeaderValue::from_str(api_key).map_err(|e| ApiClientError::Config(e.to_string()))?,
        );
    }
    Ok(headers)
}
