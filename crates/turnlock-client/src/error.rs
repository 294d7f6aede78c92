//! Error types for the client protocols.
//!
//! Precondition failures (`ChannelNotEstablished`, `UnsupportedAlgorithm`)
//! are raised before any network I/O. Transport and protocol failures never
//! rotate the session key, so the caller can always recover with a retry or
//! a fresh handshake.

use thiserror::Error;
use turnlock_core::{CodecError, ProtocolError};
use turnlock_crypto::CryptoError;

/// Errors produced by the handshake and secure request protocols.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Request attempted before a handshake installed a symmetric key.
    #[error("channel not established: run the handshake first")]
    ChannelNotEstablished,

    /// Request named a compression algorithm with no registered codec.
    #[error("unsupported compression algorithm: '{name}'")]
    UnsupportedAlgorithm {
        /// The unregistered codec name
        name: String,
    },

    /// Network-level failure (connect, send, or timeout).
    #[error("transport failure: {reason}")]
    Transport {
        /// Transport error description
        reason: String,
    },

    /// Endpoint answered with a non-2xx status.
    #[error("unexpected http status {status}")]
    UnexpectedStatus {
        /// The HTTP status code received
        status: u16,
    },

    /// Response body did not match the protocol shape.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Cryptographic failure (bad key, failed decrypt, failed tag check).
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// A registered codec failed to encode or decode.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
