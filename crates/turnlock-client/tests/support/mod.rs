//! Scripted in-process server double for protocol tests.
//!
//! `MockTransport` plays both endpoints: `/rs` issues an RSA-encrypted
//! bootstrap key, `/api` verifies the session header, decrypts the request
//! under its own copy of the current key, and answers with a rekeying
//! response — the same state machine the real server runs, minus the
//! business logic.

#![allow(dead_code)] // each test crate uses a subset of this module

use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use rand::{Rng, rngs::OsRng};
use serde_json::{Value, json};
use turnlock_client::{
    ClientError, PUBLIC_KEY_FIELD, SESSION_HEADER, Transport, TransportResponse,
};
use turnlock_core::{EncryptedBlob, RequestEnvelope};
use turnlock_crypto::{
    HashAlgorithm, SymmetricKey, encrypt_with_public_pem, hash, sym_decrypt, sym_encrypt,
};

/// Failure modes the mock can be switched into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Behave like a healthy server
    Normal,
    /// Answer every request with HTTP 500
    Http500,
    /// Answer `/rs` with a non-JSON body
    MalformedBody,
    /// Flip a tag byte in the `/api` response and skip the server-side
    /// rotation (a tampered response the client must reject)
    TamperTag,
}

/// Server-side state shared by all calls on one mock.
pub struct MockServer {
    /// Key issued at handshake time
    pub issued_key: Vec<u8>,
    /// Server's view of the current session key
    key: Mutex<Option<Vec<u8>>>,
    mode: Mutex<Mode>,
    /// How long `/api` holds each request (for overlap detection)
    pub hold: Option<Duration>,
    /// Whether compressed inner payloads are byte-reversed (the test codec)
    pub reverse_codec: bool,
    pub form_calls: AtomicUsize,
    pub json_calls: AtomicUsize,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl MockServer {
    /// Healthy server issuing a fixed 32-byte key.
    pub fn new() -> Arc<Self> {
        Self::with_issued_key(b"0123456789abcdefghijklmnopqrstuv".to_vec())
    }

    /// Healthy server issuing the given bootstrap key.
    pub fn with_issued_key(issued_key: Vec<u8>) -> Arc<Self> {
        let mut server = Self::template();
        server.issued_key = issued_key;
        Arc::new(server)
    }

    /// Healthy server that holds each `/api` call for `hold` before
    /// answering, to make request overlap observable.
    pub fn with_hold(hold: Duration) -> Arc<Self> {
        let mut server = Self::template();
        server.hold = Some(hold);
        Arc::new(server)
    }

    /// Healthy server that byte-reverses compressed inner payloads.
    pub fn with_reverse_codec() -> Arc<Self> {
        let mut server = Self::template();
        server.reverse_codec = true;
        Arc::new(server)
    }

    fn template() -> Self {
        Self {
            issued_key: b"0123456789abcdefghijklmnopqrstuv".to_vec(),
            key: Mutex::new(None),
            mode: Mutex::new(Mode::Normal),
            hold: None,
            reverse_codec: false,
            form_calls: AtomicUsize::new(0),
            json_calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Switch the failure mode.
    pub fn set_mode(&self, mode: Mode) {
        *self.mode.lock().unwrap() = mode;
    }

    fn mode(&self) -> Mode {
        *self.mode.lock().unwrap()
    }

    /// Server's current session key bytes.
    pub fn current_key(&self) -> Option<Vec<u8>> {
        self.key.lock().unwrap().clone()
    }

    /// Session identifier the server expects on the next request.
    pub fn expected_session_id(&self) -> Option<String> {
        self.current_key().map(|k| hash(&k, HashAlgorithm::Sha256))
    }
}

/// Transport double wired to a [`MockServer`].
#[derive(Clone)]
pub struct MockTransport(pub Arc<MockServer>);

fn ok(body: String) -> TransportResponse {
    TransportResponse { status: 200, body }
}

fn status(status: u16, body: &str) -> TransportResponse {
    TransportResponse { status, body: body.to_owned() }
}

fn random_key_string() -> String {
    // Printable so it survives the JSON string carrying it
    (0..32).map(|_| char::from(OsRng.sample(rand::distributions::Alphanumeric))).collect()
}

#[async_trait]
impl Transport for MockTransport {
    async fn post_form(
        &self,
        _path: &str,
        fields: &[(&str, &str)],
    ) -> Result<TransportResponse, ClientError> {
        let server = &self.0;
        server.form_calls.fetch_add(1, Ordering::SeqCst);

        match server.mode() {
            Mode::Http500 => return Ok(status(500, "internal error")),
            Mode::MalformedBody => return Ok(ok("not json".to_owned())),
            Mode::Normal | Mode::TamperTag => {},
        }

        let pem = fields
            .iter()
            .find(|(name, _)| *name == PUBLIC_KEY_FIELD)
            .map(|(_, value)| *value)
            .expect("handshake must send the public key field");

        let ciphertext = encrypt_with_public_pem(pem, &server.issued_key).unwrap();
        *server.key.lock().unwrap() = Some(server.issued_key.clone());

        Ok(ok(json!({ "data": hex::encode(ciphertext) }).to_string()))
    }

    async fn post_json(
        &self,
        _path: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<TransportResponse, ClientError> {
        let server = &self.0;
        server.json_calls.fetch_add(1, Ordering::SeqCst);

        let concurrent = server.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        server.max_in_flight.fetch_max(concurrent, Ordering::SeqCst);
        if let Some(hold) = server.hold {
            tokio::time::sleep(hold).await;
        }
        server.in_flight.fetch_sub(1, Ordering::SeqCst);

        if server.mode() == Mode::Http500 {
            return Ok(status(500, "internal error"));
        }

        let Some(key_bytes) = server.current_key() else {
            return Ok(status(400, "no encrypted channel"));
        };
        let key = SymmetricKey::new(key_bytes.clone()).unwrap();

        // The session header must prove possession of the current key
        let session = headers
            .iter()
            .find(|(name, _)| *name == SESSION_HEADER)
            .map(|(_, value)| *value);
        if session != Some(hash(&key_bytes, HashAlgorithm::Sha256).as_str()) {
            return Ok(status(403, "session mismatch"));
        }

        let envelope: RequestEnvelope = match serde_json::from_str(body) {
            Ok(envelope) => envelope,
            Err(_) => return Ok(status(400, "bad envelope")),
        };
        let (iv, data, tag) = envelope.content.decode().unwrap();
        let Ok(mut inner) = sym_decrypt(&iv, &data, &tag, &key) else {
            return Ok(status(400, "bad ciphertext"));
        };
        if envelope.compression {
            if !server.reverse_codec {
                return Ok(status(400, "no codec configured"));
            }
            inner.reverse();
        }
        let Ok(call) = serde_json::from_slice::<Value>(&inner) else {
            return Ok(status(400, "bad inner payload"));
        };

        // Rekey: the response carries the key for the NEXT round, sealed
        // under the key for THIS round
        let next_key = random_key_string();
        let plaintext = json!({
            "data": { "operate": call["operate"], "args": call["args"] },
            "key": next_key,
        })
        .to_string();
        let mut sealed = sym_encrypt(plaintext.as_bytes(), &key);

        if server.mode() == Mode::TamperTag {
            sealed.tag[0] ^= 0x01;
        } else {
            *server.key.lock().unwrap() = Some(next_key.into_bytes());
        }

        let message =
            if envelope.message.is_empty() { "OK".to_owned() } else { envelope.message };
        let response = json!({
            "code": 0,
            "message": message,
            "data": EncryptedBlob::from_sealed(&sealed),
        });
        Ok(ok(response.to_string()))
    }
}
