//! Symmetric session encryption using AES-GCM.
//!
//! The provider emits ciphertext and tag as one contiguous buffer
//! (ciphertext followed by a 16-byte tag); the wire format carries them as
//! separate fields, so this module splits on encrypt and recombines on
//! decrypt.
//!
//! # Security
//!
//! - A fresh random 12-byte IV is drawn from the OS RNG on every encryption.
//!   IV reuse under one key breaks GCM's authentication guarantee.
//! - Key lengths are validated at [`SymmetricKey`] construction, before any
//!   provider call.
//! - Key material is zeroized on drop.

use core::fmt;

use aes_gcm::{
    Aes128Gcm, Aes256Gcm, AesGcm,
    aead::{Aead, KeyInit, Nonce, consts::U12},
    aes::Aes192,
};
use rand::{RngCore, rngs::OsRng};
use zeroize::Zeroize;

use crate::error::CryptoError;

/// AES-192-GCM (the upstream crate only aliases the 128/256 variants).
type Aes192Gcm = AesGcm<Aes192, U12>;

/// GCM nonce size in bytes.
pub const IV_SIZE: usize = 12;

/// GCM authentication tag size in bytes.
pub const TAG_SIZE: usize = 16;

/// Legal AES key lengths in bytes (AES-128/192/256).
pub const KEY_SIZES: [usize; 3] = [16, 24, 32];

/// A validated AES session key.
///
/// Construction rejects any byte length other than 16, 24, or 32. The
/// channel replaces this key wholesale after every successful round trip;
/// it is never merged or derived in place.
#[derive(Clone)]
pub struct SymmetricKey {
    bytes: Vec<u8>,
}

impl SymmetricKey {
    /// Validate and wrap raw key bytes.
    pub fn new(bytes: Vec<u8>) -> Result<Self, CryptoError> {
        if !KEY_SIZES.contains(&bytes.len()) {
            return Err(CryptoError::InvalidKeyLength { got: bytes.len() });
        }
        Ok(Self { bytes })
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Key length in bytes (16, 24, or 32).
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; construction rejects empty keys.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Never print key material
impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymmetricKey({} bytes)", self.bytes.len())
    }
}

impl Drop for SymmetricKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Output of [`sym_encrypt`]: the IV/ciphertext/tag triple carried on the
/// wire as separate fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedMessage {
    /// Random GCM nonce
    pub iv: [u8; IV_SIZE],
    /// Ciphertext without the tag
    pub ciphertext: Vec<u8>,
    /// GCM authentication tag
    pub tag: [u8; TAG_SIZE],
}

/// Encrypt `plaintext` under `key` with a fresh random IV.
///
/// The combined provider output is split into ciphertext and the fixed
/// 16-byte trailing tag.
pub fn sym_encrypt(plaintext: &[u8], key: &SymmetricKey) -> SealedMessage {
    let mut iv = [0u8; IV_SIZE];
    OsRng.fill_bytes(&mut iv);

    let mut combined = match key.len() {
        16 => seal::<Aes128Gcm>(key.as_bytes(), &iv, plaintext),
        24 => seal::<Aes192Gcm>(key.as_bytes(), &iv, plaintext),
        32 => seal::<Aes256Gcm>(key.as_bytes(), &iv, plaintext),
        _ => unreachable!("key length validated at construction"),
    };

    let tag_start = combined.len() - TAG_SIZE;
    let mut tag = [0u8; TAG_SIZE];
    tag.copy_from_slice(&combined[tag_start..]);
    combined.truncate(tag_start);

    SealedMessage { iv, ciphertext: combined, tag }
}

/// Decrypt an IV/ciphertext/tag triple under `key`.
///
/// # Errors
///
/// - `InvalidIvLength` / `InvalidTagLength`: wire fields have the wrong size
/// - `AuthenticationFailed`: tag does not verify (tampered or wrong key)
pub fn sym_decrypt(
    iv: &[u8],
    ciphertext: &[u8],
    tag: &[u8],
    key: &SymmetricKey,
) -> Result<Vec<u8>, CryptoError> {
    if iv.len() != IV_SIZE {
        return Err(CryptoError::InvalidIvLength { got: iv.len() });
    }
    if tag.len() != TAG_SIZE {
        return Err(CryptoError::InvalidTagLength { got: tag.len() });
    }

    // Recombine into the ciphertext-then-tag form the provider expects
    let mut combined = Vec::with_capacity(ciphertext.len() + TAG_SIZE);
    combined.extend_from_slice(ciphertext);
    combined.extend_from_slice(tag);

    match key.len() {
        16 => open::<Aes128Gcm>(key.as_bytes(), iv, &combined),
        24 => open::<Aes192Gcm>(key.as_bytes(), iv, &combined),
        32 => open::<Aes256Gcm>(key.as_bytes(), iv, &combined),
        _ => unreachable!("key length validated at construction"),
    }
}

fn seal<C: Aead + KeyInit>(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Vec<u8> {
    let Ok(cipher) = C::new_from_slice(key) else {
        unreachable!("key length validated at construction");
    };
    let Ok(combined) = cipher.encrypt(Nonce::<C>::from_slice(iv), plaintext) else {
        unreachable!("AES-GCM encryption cannot fail with valid inputs");
    };
    combined
}

fn open<C: Aead + KeyInit>(key: &[u8], iv: &[u8], combined: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let Ok(cipher) = C::new_from_slice(key) else {
        unreachable!("key length validated at construction");
    };
    cipher
        .decrypt(Nonce::<C>::from_slice(iv), combined)
        .map_err(|_| CryptoError::AuthenticationFailed)
}
