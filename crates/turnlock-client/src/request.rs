//! Secure request protocol.
//!
//! Per-call flow: seal the operation into the two-layer envelope under the
//! current key, send it with a freshly derived session identifier, decrypt
//! the response with that same key, and install the replacement key the
//! response carries.
//!
//! The key is rotated only after the response decrypts and parses; transport
//! failures and tampered payloads leave the current key in place so the
//! caller may retry. Once the new key is installed the server already
//! expects it, so rotation happens even if the caller never looks at the
//! returned payload.

use tracing::debug;
use turnlock_core::{
    ChannelState, CodecRegistry, EncryptedBlob, OperationCall, RekeyPayload, RequestEnvelope,
    ResponseEnvelope,
};
use turnlock_crypto::{SymmetricKey, sym_decrypt, sym_encrypt};

use crate::{
    error::ClientError,
    reply::Reply,
    transport::{SECURE_PATH, SESSION_HEADER, Transport},
};

/// Send one operation over the established channel.
///
/// `algorithm` selects a registered compression codec for the inner layer;
/// empty means encrypt the canonical JSON directly. Naming an unregistered
/// codec fails before any network I/O, never falling back to plaintext.
///
/// The caller must hold the channel lock across this whole call; the key
/// read at entry and the key write at the end form one critical section.
pub async fn perform_request<T: Transport + ?Sized>(
    transport: &T,
    state: &mut ChannelState,
    codecs: &CodecRegistry,
    call: &OperationCall,
    algorithm: &str,
    message: &str,
) -> Result<Reply, ClientError> {
    // Precondition: established channel, checked before any I/O
    let Some(key) = state.symmetric_key().cloned() else {
        return Err(ClientError::ChannelNotEstablished);
    };

    let mut inner = call.to_canonical_json()?.into_bytes();
    if !algorithm.is_empty() {
        let codec = codecs
            .get(algorithm)
            .ok_or_else(|| ClientError::UnsupportedAlgorithm { name: algorithm.to_owned() })?;
        inner = codec.encode(&inner)?;
    }

    let sealed = sym_encrypt(&inner, &key);
    let envelope = RequestEnvelope {
        message: message.to_owned(),
        compression: !algorithm.is_empty(),
        algorithm: algorithm.to_owned(),
        content: EncryptedBlob::from_sealed(&sealed),
    };
    let body = envelope.to_json()?;

    // Derived fresh every call; the key changes every round trip
    let session_id = match state.session_id() {
        Some(id) => id,
        None => return Err(ClientError::ChannelNotEstablished),
    };

    let response =
        transport.post_json(SECURE_PATH, &[(SESSION_HEADER, session_id.as_str())], &body).await?;
    if !response.is_success() {
        // No rotation: the caller may legitimately retry with the same key
        return Err(ClientError::UnexpectedStatus { status: response.status });
    }

    let envelope = ResponseEnvelope::from_json(&response.body)?;
    let (iv, data, tag) = envelope.data.decode()?;
    let plaintext = sym_decrypt(&iv, &data, &tag, &key)?;
    let payload = RekeyPayload::from_plaintext(&plaintext)?;

    // The server has committed to the new key; failing to install it here
    // would permanently desynchronize the channel
    let next_key = SymmetricKey::new(payload.key.into_bytes())?;
    state.install_key(next_key);
    debug!(operate = %call.operate, code = envelope.code, "secure request completed, key rotated");

    Ok(Reply { data: payload.data, message: envelope.message, code: envelope.code })
}
