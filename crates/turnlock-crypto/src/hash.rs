//! Hashing primitives.
//!
//! Hex-encoded digests over raw bytes. The session identifier is the SHA-256
//! digest of the current symmetric key, so the output here must stay
//! byte-for-byte stable across releases.

use sha2::{Digest, Sha256, Sha512};

/// Digest algorithms supported by [`hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// SHA-256 (session identifiers, OAEP label hash)
    Sha256,
    /// SHA-512
    Sha512,
}

/// Hash `data` and return the lowercase hex digest.
pub fn hash(data: &[u8], algorithm: HashAlgorithm) -> String {
    match algorithm {
        HashAlgorithm::Sha256 => hex::encode(Sha256::digest(data)),
        HashAlgorithm::Sha512 => hex::encode(Sha512::digest(data)),
    }
}
