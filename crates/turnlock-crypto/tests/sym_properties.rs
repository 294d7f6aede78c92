//! Property-based tests for the symmetric session primitives
//!
//! These tests verify the fundamental invariants of the primitive layer:
//!
//! 1. **Round-trip**: decrypt(encrypt(p, k), k) == p for all legal keys
//! 2. **Validation-first**: illegal key lengths fail before any provider call
//! 3. **Tamper detection**: any single-bit flip in tag or ciphertext is caught

use proptest::prelude::*;
use turnlock_crypto::{CryptoError, KEY_SIZES, SymmetricKey, sym_decrypt, sym_encrypt};

// Strategy over the three legal AES key lengths
fn legal_key() -> impl Strategy<Value = SymmetricKey> {
    prop::sample::select(KEY_SIZES.to_vec())
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
        .prop_map(|bytes| SymmetricKey::new(bytes).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_encrypt_decrypt_roundtrip(
        plaintext in prop::collection::vec(any::<u8>(), 0..1000),
        key in legal_key(),
    ) {
        let sealed = sym_encrypt(&plaintext, &key);
        let decrypted = sym_decrypt(&sealed.iv, &sealed.ciphertext, &sealed.tag, &key).unwrap();
        prop_assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn prop_illegal_key_lengths_rejected(len in 0usize..64) {
        prop_assume!(!KEY_SIZES.contains(&len));
        let result = SymmetricKey::new(vec![0u8; len]);
        prop_assert_eq!(result.err(), Some(CryptoError::InvalidKeyLength { got: len }));
    }

    #[test]
    fn prop_tag_bit_flip_detected(
        plaintext in prop::collection::vec(any::<u8>(), 1..256),
        key in legal_key(),
        bit in 0usize..128,
    ) {
        let mut sealed = sym_encrypt(&plaintext, &key);
        sealed.tag[bit / 8] ^= 1 << (bit % 8);
        let result = sym_decrypt(&sealed.iv, &sealed.ciphertext, &sealed.tag, &key);
        prop_assert_eq!(result, Err(CryptoError::AuthenticationFailed));
    }

    #[test]
    fn prop_ciphertext_bit_flip_detected(
        plaintext in prop::collection::vec(any::<u8>(), 1..256),
        key in legal_key(),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut sealed = sym_encrypt(&plaintext, &key);
        let i = index.index(sealed.ciphertext.len());
        sealed.ciphertext[i] ^= 1 << bit;
        let result = sym_decrypt(&sealed.iv, &sealed.ciphertext, &sealed.tag, &key);
        prop_assert_eq!(result, Err(CryptoError::AuthenticationFailed));
    }
}
