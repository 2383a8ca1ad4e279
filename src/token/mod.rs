//! # Token Generation
//!
//! Tokens are opaque bearer strings. Nothing here verifies them; the data
//! store compares them byte for byte.

use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

/// Default number of random bytes in a generated token (256 bits)
pub const DEFAULT_TOKEN_BYTES: usize = 32;

/// Source of fresh tokens
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// OS-random tokens encoded as URL-safe base64 without padding
#[derive(Debug, Clone)]
pub struct RandomTokenGenerator {
    bytes: usize,
}

impl RandomTokenGenerator {
    /// Generator producing tokens from `bytes` random bytes.
    ///
    /// A request for zero bytes is raised to one so tokens are never empty.
    pub fn new(bytes: usize) -> Self {
        Self {
            bytes: bytes.max(1),
        }
    }

    pub fn bytes(&self) -> usize {
        self.bytes
    }
}

impl Default for RandomTokenGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_BYTES)
    }
}

impl TokenGenerator for RandomTokenGenerator {
    fn generate(&self) -> String {
        let mut bytes = vec![0u8; self.bytes];
        OsRng.fill_bytes(&mut bytes);
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
    }
}
