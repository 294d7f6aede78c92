//! Error types for the primitive layer.
//!
//! Key-length and wire-format problems are reported before any provider call
//! so callers can distinguish local validation failures from actual
//! cryptographic failures.

use thiserror::Error;

/// Errors produced by the cryptographic primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Symmetric key is not a legal AES size.
    #[error("invalid symmetric key length: {got} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength {
        /// Length of the rejected key in bytes
        got: usize,
    },

    /// IV is not the GCM nonce size.
    #[error("invalid IV length: {got} bytes (expected 12)")]
    InvalidIvLength {
        /// Length of the rejected IV in bytes
        got: usize,
    },

    /// Authentication tag is not the GCM tag size.
    #[error("invalid tag length: {got} bytes (expected 16)")]
    InvalidTagLength {
        /// Length of the rejected tag in bytes
        got: usize,
    },

    /// GCM tag verification failed (tampered ciphertext or wrong key).
    #[error("authentication failed: tag did not verify")]
    AuthenticationFailed,

    /// Asymmetric keypair generation failed.
    #[error("key generation failed: {reason}")]
    KeyGeneration {
        /// Provider error description
        reason: String,
    },

    /// Public key could not be parsed or exported.
    #[error("invalid public key: {reason}")]
    InvalidPublicKey {
        /// Provider error description
        reason: String,
    },

    /// OAEP encryption or decryption was rejected by the provider.
    #[error("asymmetric operation failed: {reason}")]
    Asymmetric {
        /// Provider error description
        reason: String,
    },

    /// Base64 input could not be decoded.
    #[error("base64 decode failed: {reason}")]
    Base64 {
        /// Decoder error description
        reason: String,
    },

    /// Hex input could not be decoded.
    #[error("hex decode failed: {reason}")]
    Hex {
        /// Decoder error description
        reason: String,
    },

    /// Bytes were not valid UTF-8 where text was required.
    #[error("invalid utf-8: {reason}")]
    Utf8 {
        /// Decoder error description
        reason: String,
    },
}
