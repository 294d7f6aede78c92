//! Asymmetric handshake encryption using RSA-OAEP.
//!
//! A keypair exists only for the duration of one handshake: the public half
//! is exported as SPKI PEM and sent to the server, the private half decrypts
//! exactly one bootstrap key, and the pair is then discarded.

use rsa::{
    Oaep, RsaPrivateKey, RsaPublicKey,
    pkcs8::{DecodePublicKey, EncodePublicKey, LineEnding},
};
use sha2::Sha256;

use crate::error::CryptoError;

/// RSA modulus length in bits.
pub const RSA_MODULUS_BITS: usize = 2048;

/// An RSA-OAEP keypair (2048-bit modulus, e=65537, SHA-256 padding hash).
pub struct RsaKeypair {
    private: RsaPrivateKey,
    public: RsaPublicKey,
}

impl RsaKeypair {
    /// Generate a fresh 2048-bit keypair from the OS RNG.
    pub fn generate() -> Result<Self, CryptoError> {
        let mut rng = rand::rngs::OsRng;
        let private = RsaPrivateKey::new(&mut rng, RSA_MODULUS_BITS)
            .map_err(|e| CryptoError::KeyGeneration { reason: e.to_string() })?;
        let public = RsaPublicKey::from(&private);
        Ok(Self { private, public })
    }

    /// Export the public half as SPKI PEM (`PUBLIC KEY` armor, 64-column
    /// Base64 folding). Transmitted verbatim to the key-exchange endpoint.
    pub fn public_key_pem(&self) -> Result<String, CryptoError> {
        self.public
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| CryptoError::InvalidPublicKey { reason: e.to_string() })
    }

    /// Decrypt OAEP ciphertext with the private half.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.private
            .decrypt(Oaep::new::<Sha256>(), ciphertext)
            .map_err(|e| CryptoError::Asymmetric { reason: e.to_string() })
    }
}

/// Encrypt `plaintext` under an SPKI PEM public key with OAEP/SHA-256.
///
/// The channel itself only decrypts; this is the peer-facing half used by
/// tooling and test doubles that stand in for the key-exchange endpoint.
pub fn encrypt_with_public_pem(pem: &str, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let public = RsaPublicKey::from_public_key_pem(pem)
        .map_err(|e| CryptoError::InvalidPublicKey { reason: e.to_string() })?;
    let mut rng = rand::rngs::OsRng;
    public
        .encrypt(&mut rng, Oaep::new::<Sha256>(), plaintext)
        .map_err(|e| CryptoError::Asymmetric { reason: e.to_string() })
}
