//! Secure channel façade.
//!
//! [`SecureChannel`] owns the channel state behind an async mutex and runs
//! the handshake and request protocols against an explicit transport. The
//! lock is held from key read through key write, so requests serialize and
//! a handshake can never interleave with an in-flight request — two
//! concurrent requests racing on the rotating key would permanently diverge
//! the client and server key streams.

use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::warn;
use turnlock_core::{ChannelState, CodecRegistry, OperationCall};
use turnlock_crypto::SymmetricKey;

use crate::{
    error::ClientError, handshake::run_handshake, reply::Reply, request::perform_request,
    transport::Transport,
};

/// A single logical secure channel to one server.
///
/// Not designed for concurrent in-flight requests; calls on one instance
/// serialize internally.
pub struct SecureChannel<T: Transport> {
    transport: T,
    state: Mutex<ChannelState>,
    codecs: CodecRegistry,
}

impl<T: Transport> SecureChannel<T> {
    /// Channel with no registered compression codecs (the deployed default).
    pub fn new(transport: T) -> Self {
        Self::with_codecs(transport, CodecRegistry::new())
    }

    /// Channel with a caller-supplied codec registry.
    pub fn with_codecs(transport: T, codecs: CodecRegistry) -> Self {
        Self { transport, state: Mutex::new(ChannelState::new()), codecs }
    }

    /// Run the one-time handshake, installing the bootstrap symmetric key.
    ///
    /// Safe to call again to re-establish a broken channel; the old key is
    /// replaced only on success.
    pub async fn handshake(&self) -> Result<(), ClientError> {
        let mut state = self.state.lock().await;
        run_handshake(&self.transport, &mut state).await
    }

    /// Send an operation, returning the typed result.
    ///
    /// Equivalent to [`try_request_with`](Self::try_request_with) with no
    /// compression and an empty envelope message.
    pub async fn try_request(
        &self,
        operate: &str,
        args: Map<String, Value>,
    ) -> Result<Reply, ClientError> {
        self.try_request_with(operate, args, "", "").await
    }

    /// Send an operation with an explicit compression algorithm and
    /// envelope message.
    pub async fn try_request_with(
        &self,
        operate: &str,
        args: Map<String, Value>,
        algorithm: &str,
        message: &str,
    ) -> Result<Reply, ClientError> {
        let call = OperationCall::new(operate, args);
        let mut state = self.state.lock().await;
        perform_request(&self.transport, &mut state, &self.codecs, &call, algorithm, message).await
    }

    /// Send an operation, collapsing any failure into the uniform
    /// `(Null, description, 999)` triple.
    pub async fn request(&self, operate: &str, args: Map<String, Value>) -> Reply {
        self.request_with(operate, args, "", "").await
    }

    /// [`request`](Self::request) with an explicit compression algorithm
    /// and envelope message.
    pub async fn request_with(
        &self,
        operate: &str,
        args: Map<String, Value>,
        algorithm: &str,
        message: &str,
    ) -> Reply {
        match self.try_request_with(operate, args, algorithm, message).await {
            Ok(reply) => reply,
            Err(error) => {
                warn!(%error, "secure request failed");
                Reply::failure(&error)
            },
        }
    }

    /// True once a handshake has installed a symmetric key.
    pub async fn is_established(&self) -> bool {
        self.state.lock().await.is_established()
    }

    /// Current session identifier (hex SHA-256 of the current key), if the
    /// channel is established.
    pub async fn session_id(&self) -> Option<String> {
        self.state.lock().await.session_id()
    }

    /// Install an externally provisioned session key.
    ///
    /// Replaces any current key, exactly as a handshake would. Intended for
    /// resuming a persisted session or for test setups.
    pub async fn install_key(&self, key: SymmetricKey) {
        self.state.lock().await.install_key(key);
    }
}
