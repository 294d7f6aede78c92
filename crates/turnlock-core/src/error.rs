//! Error types for envelope encoding and decoding.
//!
//! Wire-shape problems (bad JSON, missing fields, undecodable Base64) are
//! kept distinct from cryptographic failures so callers can tell a broken
//! peer from a tampered payload.

use thiserror::Error;
use turnlock_crypto::CryptoError;

/// Errors produced while building or parsing protocol envelopes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Envelope JSON did not match the expected shape.
    #[error("malformed envelope: {reason}")]
    MalformedEnvelope {
        /// Parser error description
        reason: String,
    },

    /// Serialization of an outgoing envelope failed.
    #[error("envelope serialization failed: {reason}")]
    Serialize {
        /// Serializer error description
        reason: String,
    },

    /// A wire field could not be decoded or a payload failed verification.
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

/// Errors produced by a registered compression codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("codec '{name}' failed: {reason}")]
pub struct CodecError {
    /// Name of the codec that failed
    pub name: String,
    /// Codec error description
    pub reason: String,
}
