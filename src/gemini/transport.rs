//! HTTP transport seam.
//!
//! The retry loop in `api.rs` only sees this trait, so tests can drive it
//! with scripted responses instead of a live endpoint.

use async_trait::async_trait;

use crate::QueryError;

/// Raw status and body of one HTTP exchange.
pub(crate) struct WireResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub(crate) trait Transport: Send + Sync {
    /// POST a JSON body, returning the raw response or a transport failure.
    async fn send(&self, url: &str, body: &serde_json::Value) -> Result<WireResponse, QueryError>;
}

/// Production transport backed by reqwest.
pub(crate) struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub(crate) fn new(timeout: std::time::Duration) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(timeout)
                .build()
                .expect("failed to build HTTP client"),
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, url: &str, body: &serde_json::Value) -> Result<WireResponse, QueryError> {
        let response = self
            .http
            .post(url)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| QueryError::Connection(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| QueryError::Connection(e.to_string()))?;

        Ok(WireResponse { status, body })
    }
}
