//! Uniform request result shape.
//!
//! Callers of the infallible [`crate::SecureChannel::request`] wrapper get
//! the same `(data, message, code)` triple whether the server answered or
//! the client failed locally; the reserved code `999` marks the latter.

use serde_json::Value;

use crate::error::ClientError;

/// Sentinel code for client-side failures.
///
/// Never produced by the server path; server-issued codes pass through
/// verbatim.
pub const CLIENT_FAILURE_CODE: i64 = 999;

/// Result triple of a secure request.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// Decrypted business payload, `Null` on failure
    pub data: Value,
    /// Server message, or a description of the client-side failure
    pub message: String,
    /// Server-issued code, or [`CLIENT_FAILURE_CODE`]
    pub code: i64,
}

impl Reply {
    /// Uniform failure shape for a client-side error.
    ///
    /// The message is always the error's display string, never a raw caught
    /// value.
    pub fn failure(error: &ClientError) -> Self {
        Self { data: Value::Null, message: error.to_string(), code: CLIENT_FAILURE_CODE }
    }

    /// True if this reply is the client-side failure sentinel.
    pub fn is_client_failure(&self) -> bool {
        self.code == CLIENT_FAILURE_CODE
    }
}
