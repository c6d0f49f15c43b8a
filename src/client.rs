//! HTTP client for the inventory endpoint.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::{AppError, CheckError, Result};
use crate::inventory::InventoryPayload;

/// Route that produces the inventory snapshot
pub const CHECK_PATH: &str = "/sysinfo/check";
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8188";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the backend, without the check path
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Issues one `POST /sysinfo/check` per call and parses the JSON body
#[derive(Debug, Clone)]
pub struct CheckClient {
    client: reqwest::Client,
    url: String,
}

impl CheckClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("sysinfo-panel/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::client(e.to_string()))?;

        Ok(Self {
            client,
            url: check_url(&config.endpoint),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch one inventory snapshot.
    ///
    /// Transport failures, non-2xx statuses and unparseable bodies map to the
    /// three [`CheckError`] variants; callers treat them alike.
    pub async fn check(&self) -> std::result::Result<InventoryPayload, CheckError> {
        info!(url = %self.url, "running system info check");

        let response = self
            .client
            .post(&self.url)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "check request failed");
                CheckError::transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "check endpoint returned an error status");
            return Err(CheckError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            warn!(error = %e, "failed to read check response body");
            CheckError::transport(e.to_string())
        })?;

        let payload = InventoryPayload::from_json(&body).inspect_err(|e| {
            warn!(error = %e, "check response was not usable");
        })?;
        debug!(keys = payload.len(), "check response parsed");
        Ok(payload)
    }
}

fn check_url(endpoint: &str) -> String {
    format!("{}{}", endpoint.trim_end_matches('/'), CHECK_PATH)
}
