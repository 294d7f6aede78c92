//! Byte/string codecs for wire-format boundaries.
//!
//! Deterministic helpers over the standard Base64 alphabet and hex. Encoding
//! is total; decoding fails with a typed error on malformed input.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::error::CryptoError;

/// Encode bytes as standard Base64.
pub fn b64_encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode standard Base64 into bytes.
pub fn b64_decode(data: &str) -> Result<Vec<u8>, CryptoError> {
    STANDARD.decode(data).map_err(|e| CryptoError::Base64 { reason: e.to_string() })
}

/// Encode a UTF-8 string as Base64.
pub fn b64_encode_str(data: &str) -> String {
    STANDARD.encode(data.as_bytes())
}

/// Decode Base64 into a UTF-8 string.
pub fn b64_decode_str(data: &str) -> Result<String, CryptoError> {
    let bytes = b64_decode(data)?;
    String::from_utf8(bytes).map_err(|e| CryptoError::Utf8 { reason: e.to_string() })
}

/// Decode a hex string into bytes.
pub fn hex_decode(data: &str) -> Result<Vec<u8>, CryptoError> {
    hex::decode(data).map_err(|e| CryptoError::Hex { reason: e.to_string() })
}
