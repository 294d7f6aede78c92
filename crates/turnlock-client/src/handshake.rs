//! Handshake protocol.
//!
//! One-time RSA-OAEP exchange that bootstraps the first symmetric key: a
//! fresh keypair is generated, the public half travels to the key-exchange
//! endpoint as PEM, and the response's hex ciphertext decrypts to the
//! bootstrap key.
//!
//! Everything is staged in locals; [`ChannelState`] is written only after
//! every step has succeeded, so a failed handshake leaves the previous key
//! intact and the caller can simply retry the whole exchange.

use serde::Deserialize;
use tracing::debug;
use turnlock_core::{ChannelState, ProtocolError};
use turnlock_crypto::{RsaKeypair, SymmetricKey, hex_decode};

use crate::{
    error::ClientError,
    transport::{KEY_EXCHANGE_PATH, PUBLIC_KEY_FIELD, Transport},
};

/// Body of a successful key-exchange response.
#[derive(Debug, Deserialize)]
struct KeyExchangeResponse {
    /// Hex RSA-OAEP ciphertext of the bootstrap symmetric key
    data: String,
}

/// Run the handshake and install the bootstrap key into `state`.
///
/// The keypair lives only for the duration of this call; the private half
/// decrypts exactly one ciphertext and is then dropped.
pub async fn run_handshake<T: Transport + ?Sized>(
    transport: &T,
    state: &mut ChannelState,
) -> Result<(), ClientError> {
    let keypair = RsaKeypair::generate()?;
    let pem = keypair.public_key_pem()?;

    let response = transport.post_form(KEY_EXCHANGE_PATH, &[(PUBLIC_KEY_FIELD, &pem)]).await?;
    if !response.is_success() {
        return Err(ClientError::UnexpectedStatus { status: response.status });
    }

    let body: KeyExchangeResponse = serde_json::from_str(&response.body)
        .map_err(|e| ProtocolError::MalformedEnvelope { reason: e.to_string() })
        .map_err(ClientError::from)?;

    let ciphertext = hex_decode(&body.data)?;
    let key_bytes = keypair.decrypt(&ciphertext)?;
    let key = SymmetricKey::new(key_bytes)?;

    // Every step succeeded; only now does state change
    state.install_key(key);
    debug!("handshake complete, channel established");
    Ok(())
}
