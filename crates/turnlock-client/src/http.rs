//! HTTP transport for the client.
//!
//! Thin `reqwest` layer behind the [`Transport`] trait. Protocol logic lives
//! in [`crate::handshake`] and [`crate::request`]; this module only moves
//! bytes and keeps the cookie jar that the server uses for session
//! continuity.

use std::time::Duration;

use async_trait::async_trait;

use crate::{
    error::ClientError,
    transport::{Transport, TransportResponse},
};

/// Configuration for [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Base URL of the server, without a trailing slash (e.g.
    /// `https://example.com`).
    pub base_url: String,
    /// Per-request deadline. Expiry surfaces as an ordinary transport
    /// failure before any key rotation.
    pub timeout: Duration,
}

impl HttpTransportConfig {
    /// Config with the default 30-second timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), timeout: Duration::from_secs(30) }
    }
}

/// `reqwest`-backed transport with a persistent cookie store.
pub struct HttpTransport {
    config: HttpTransportConfig,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport from `config`.
    pub fn new(config: HttpTransportConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Transport { reason: e.to_string() })?;
        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    async fn finish(response: reqwest::Response) -> Result<TransportResponse, ClientError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport { reason: e.to_string() })?;
        Ok(TransportResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<TransportResponse, ClientError> {
        let response = self
            .client
            .post(self.url(path))
            .form(fields)
            .send()
            .await
            .map_err(|e| ClientError::Transport { reason: e.to_string() })?;
        Self::finish(response).await
    }

    async fn post_json(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<TransportResponse, ClientError> {
        let mut request = self
            .client
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .body(body.to_owned());
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Transport { reason: e.to_string() })?;
        Self::finish(response).await
    }
}
