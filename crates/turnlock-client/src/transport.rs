//! Transport seam for the client protocols.
//!
//! The protocols are written against the [`Transport`] trait so that the
//! HTTP stack stays a replaceable collaborator: production uses the
//! `reqwest`-backed [`crate::http::HttpTransport`] (behind the `transport`
//! feature), tests use scripted in-process doubles.

use async_trait::async_trait;

use crate::error::ClientError;

/// Path of the key-exchange endpoint.
pub const KEY_EXCHANGE_PATH: &str = "/rs";

/// Path of the secure business endpoint.
pub const SECURE_PATH: &str = "/api";

/// Header carrying the hex session identifier on secure requests.
pub const SESSION_HEADER: &str = "session_user";

/// Form field carrying the PEM public key during the handshake.
pub const PUBLIC_KEY_FIELD: &str = "user_key_pub_pem";

/// Status and body of a completed HTTP exchange.
///
/// Network-level failures never reach this type; they surface as
/// [`ClientError::Transport`] from the transport itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl TransportResponse {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal HTTP capability the protocols require.
///
/// Implementations must preserve cookies across calls on the same instance;
/// the server correlates session continuity through them independently of
/// the rotating key.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST a form-encoded body.
    async fn post_form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<TransportResponse, ClientError>;

    /// POST a JSON body with extra headers.
    async fn post_json(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<TransportResponse, ClientError>;
}
