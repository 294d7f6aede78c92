//! Channel state.
//!
//! One [`ChannelState`] exists per secure channel. The handshake keypair is
//! a local of the handshake itself and never lands here; the symmetric key
//! is installed once at handshake completion and then replaced wholesale
//! after every successful request/response cycle.
//!
//! The state itself is not synchronized; the client wraps it in an async
//! mutex so that one request's key read and key write cannot interleave
//! with another's.

use turnlock_crypto::{HashAlgorithm, SymmetricKey, hash};

/// Mutable per-channel session state.
#[derive(Default)]
pub struct ChannelState {
    /// Current session key. `None` until a handshake completes.
    symmetric_key: Option<SymmetricKey>,
}

impl ChannelState {
    /// Fresh state with no established channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a handshake has installed a symmetric key.
    pub fn is_established(&self) -> bool {
        self.symmetric_key.is_some()
    }

    /// Current symmetric key, if the channel is established.
    pub fn symmetric_key(&self) -> Option<&SymmetricKey> {
        self.symmetric_key.as_ref()
    }

    /// Install a new symmetric key, replacing any previous one.
    pub fn install_key(&mut self, key: SymmetricKey) {
        self.symmetric_key = Some(key);
    }

    /// Session identifier: hex SHA-256 of the current key bytes.
    ///
    /// Derived fresh on every call; the key changes every round trip, so the
    /// identifier must never be cached.
    pub fn session_id(&self) -> Option<String> {
        self.symmetric_key.as_ref().map(|k| hash(k.as_bytes(), HashAlgorithm::Sha256))
    }
}
