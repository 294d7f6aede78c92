//! Turnlock client
//!
//! Client side of the Turnlock secure channel: a one-time RSA-OAEP
//! handshake bootstraps an AES-GCM session key, and every subsequent
//! request/response cycle proves possession of the current key via a
//! derived session identifier, then replaces the key with the one carried
//! inside the decrypted response.
//!
//! # Architecture
//!
//! Protocol logic is written against the [`Transport`] trait and explicit
//! [`turnlock_core::ChannelState`]; no ambient statics. [`SecureChannel`]
//! adds the serialization lock that keeps the read-key/write-key critical
//! section of one call from interleaving with another.
//!
//! # Components
//!
//! - [`SecureChannel`]: channel façade owning state and codecs
//! - [`handshake::run_handshake`] / [`request::perform_request`]: the
//!   protocols themselves, free functions over explicit state
//! - [`Transport`]: HTTP capability seam
//!
//! # Transport (optional)
//!
//! With the `transport` feature enabled, this crate also provides
//! [`http::HttpTransport`], a `reqwest`-backed transport with a persistent
//! cookie store.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod client;
mod error;
pub mod handshake;
mod reply;
pub mod request;
pub mod transport;

#[cfg(feature = "transport")]
pub mod http;

pub use client::SecureChannel;
pub use error::ClientError;
pub use reply::{CLIENT_FAILURE_CODE, Reply};
pub use transport::{
    KEY_EXCHANGE_PATH, PUBLIC_KEY_FIELD, SECURE_PATH, SESSION_HEADER, Transport,
    TransportResponse,
};
pub use turnlock_core::{ChannelState, Codec, CodecRegistry};
