//! Pluggable compression codecs.
//!
//! The request path may compress the serialized inner layer before
//! encryption. No codec ships by default; the registry starts empty and a
//! request naming an unregistered codec is a defined error, never a silent
//! plaintext fallback.

use std::{collections::HashMap, sync::Arc};

use crate::error::CodecError;

/// A byte-oriented compression codec (gzip, deflate, zstd, lzma, ...).
pub trait Codec: Send + Sync {
    /// Compress raw bytes before encryption.
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;

    /// Decompress bytes after decryption.
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;
}

/// Name-to-codec registry consulted when a request supplies an algorithm.
#[derive(Default, Clone)]
pub struct CodecRegistry {
    codecs: HashMap<String, Arc<dyn Codec>>,
}

impl CodecRegistry {
    /// Empty registry (the deployed default: compression is inert).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a codec under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, codec: Arc<dyn Codec>) {
        self.codecs.insert(name.into(), codec);
    }

    /// Look up a codec by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Codec>> {
        self.codecs.get(name).cloned()
    }

    /// True if a codec is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.codecs.contains_key(name)
    }
}
