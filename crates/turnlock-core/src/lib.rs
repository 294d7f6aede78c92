//! Turnlock protocol core.
//!
//! Shared types between the client protocols and anything that speaks the
//! Turnlock wire format: the two-layer envelopes, the mutable channel state,
//! and the compression codec registry.
//!
//! # Wire format
//!
//! ```text
//! request:  { message, compression, algorithm, content: {iv, data, tag} }
//!                                              └─ AES-GCM of canonical
//!                                                 {operate, args} JSON
//! response: { code, message, data: {iv, data, tag} }
//!                            └─ AES-GCM of {data, key}; `key` is the
//!                               symmetric key for the NEXT round
//! ```
//!
//! Rotating the key on every round trip is the central invariant: each
//! response carries the key for the next request, never the one just used.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod codec;
pub mod envelope;
pub mod error;
pub mod state;

pub use codec::{Codec, CodecRegistry};
pub use envelope::{
    EncryptedBlob, OperationCall, RekeyPayload, RequestEnvelope, ResponseEnvelope,
};
pub use error::{CodecError, ProtocolError};
pub use state::ChannelState;
