//! Two-layer protocol envelopes.
//!
//! The inner layer is the business operation (`{operate, args}`) serialized
//! to canonical JSON before encryption. The outer layer carries transport
//! metadata plus the AES-GCM ciphertext as an [`EncryptedBlob`].
//!
//! GCM produces ciphertext and tag as one buffer; the wire keeps them as
//! separate Base64 fields, split on encode and recombined on decode.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use turnlock_crypto::{SealedMessage, b64_decode, b64_encode};

use crate::error::ProtocolError;

/// IV/ciphertext/tag triple as carried on the wire (all Base64).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedBlob {
    /// Base64 of the 12-byte GCM nonce
    pub iv: String,
    /// Base64 of the ciphertext (tag excluded)
    pub data: String,
    /// Base64 of the 16-byte GCM tag
    pub tag: String,
}

impl EncryptedBlob {
    /// Encode a sealed message into wire form.
    pub fn from_sealed(sealed: &SealedMessage) -> Self {
        Self {
            iv: b64_encode(&sealed.iv),
            data: b64_encode(&sealed.ciphertext),
            tag: b64_encode(&sealed.tag),
        }
    }

    /// Decode the Base64 fields back into raw bytes.
    ///
    /// Returns `(iv, ciphertext, tag)`. Field lengths are validated by the
    /// decrypt primitive, not here.
    pub fn decode(&self) -> Result<(Vec<u8>, Vec<u8>, Vec<u8>), ProtocolError> {
        let iv = b64_decode(&self.iv)?;
        let data = b64_decode(&self.data)?;
        let tag = b64_decode(&self.tag)?;
        Ok((iv, data, tag))
    }
}

/// Inner request layer: the operation name and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationCall {
    /// Business operation name (e.g. `get_user`)
    pub operate: String,
    /// Operation arguments
    pub args: Map<String, Value>,
}

impl OperationCall {
    /// Build an operation call.
    pub fn new(operate: impl Into<String>, args: Map<String, Value>) -> Self {
        Self { operate: operate.into(), args }
    }

    /// Serialize to canonical JSON text (object keys sorted).
    ///
    /// This is the exact byte sequence that gets encrypted; both sides must
    /// produce it identically.
    pub fn to_canonical_json(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(|e| ProtocolError::Serialize { reason: e.to_string() })
    }
}

/// Outer request layer posted to the secure endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Free-form plaintext note, usually empty
    pub message: String,
    /// True when `content` was compressed before encryption
    pub compression: bool,
    /// Codec name used for compression, empty when none
    pub algorithm: String,
    /// Encrypted inner layer
    pub content: EncryptedBlob,
}

impl RequestEnvelope {
    /// Serialize to the JSON body sent over the wire.
    pub fn to_json(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(|e| ProtocolError::Serialize { reason: e.to_string() })
    }
}

/// Response envelope returned by the secure endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Server-issued status code, 0 on success
    pub code: i64,
    /// Human-readable status message
    pub message: String,
    /// Encrypted response payload
    pub data: EncryptedBlob,
}

impl ResponseEnvelope {
    /// Parse a response body.
    pub fn from_json(body: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(body)
            .map_err(|e| ProtocolError::MalformedEnvelope { reason: e.to_string() })
    }
}

/// Decrypted response payload: the business data plus the key for the next
/// round. The key arrives as a JSON string whose UTF-8 bytes are the new
/// symmetric key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RekeyPayload {
    /// Business payload
    pub data: Value,
    /// Replacement symmetric key for the next request
    pub key: String,
}

impl RekeyPayload {
    /// Parse a decrypted response plaintext.
    pub fn from_plaintext(plaintext: &[u8]) -> Result<Self, ProtocolError> {
        serde_json::from_slice(plaintext)
            .map_err(|e| ProtocolError::MalformedEnvelope { reason: e.to_string() })
    }
}
