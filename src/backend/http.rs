// src/backend/http.rs — reqwest-backed data source

use async_trait::async_trait;
use std::time::Duration;

use super::{DataSource, Endpoint};
use crate::infra::config::BackendConfig;
use crate::infra::errors::TrackerError;

pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Build a source for the configured origin. The origin must be an
    /// absolute http(s) URL; a trailing slash is dropped.
    pub fn new(config: &BackendConfig) -> Result<Self, TrackerError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        let parsed = url::Url::parse(&base_url)
            .map_err(|e| TrackerError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TrackerError::InvalidBaseUrl(format!(
                "{base_url}: scheme must be http or https"
            )));
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("academic-tracker/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| TrackerError::Config(format!("HTTP client: {e}")))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self, endpoint: Endpoint) -> Result<serde_json::Value, TrackerError> {
        let url = self.url_for(endpoint);
        tracing::debug!(%url, "fetching");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TrackerError::Http {
                endpoint,
                message: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TrackerError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        resp.json::<serde_json::Value>()
            .await
            .map_err(|e| TrackerError::Decode {
                endpoint,
                message: e.to_string(),
            })
    }
}
