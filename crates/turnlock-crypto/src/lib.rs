//! Turnlock Cryptographic Primitives
//!
//! Building blocks for the Turnlock secure channel. All operations are pure
//! functions over explicit key and data arguments; the only side effect is
//! drawing IVs and keypairs from the OS RNG.
//!
//! # Key Lifecycle
//!
//! The channel uses two kinds of key material:
//!
//! ```text
//! RSA-OAEP Keypair (one handshake)
//!        │
//!        ▼
//! Bootstrap Symmetric Key (AES-128/192/256)
//!        │
//!        ▼ one replacement per request/response cycle
//! Next Symmetric Key (carried inside each decrypted response)
//! ```
//!
//! The RSA private half is used exactly once, to decrypt the bootstrap key,
//! and is then discarded. Symmetric keys are replaced wholesale after every
//! successful round trip and zeroized on drop.
//!
//! # Security
//!
//! - AES-GCM with a fresh random 12-byte IV per encryption
//! - Key lengths validated before any provider call
//! - Tag verification failure is a typed error, never a panic

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod asym;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod sym;

pub use asym::{RSA_MODULUS_BITS, RsaKeypair, encrypt_with_public_pem};
pub use encoding::{b64_decode, b64_decode_str, b64_encode, b64_encode_str, hex_decode};
pub use error::CryptoError;
pub use hash::{HashAlgorithm, hash};
pub use sym::{
    IV_SIZE, KEY_SIZES, SealedMessage, SymmetricKey, TAG_SIZE, sym_decrypt, sym_encrypt,
};
