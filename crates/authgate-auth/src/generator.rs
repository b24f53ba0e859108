//! Random opaque token string generation.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngExt;

/// Bytes of entropy per length-multiplier step.
const SEGMENT_BYTES: usize = 16;

/// Generates cryptographically unpredictable opaque token strings.
///
/// The length multiplier scales the entropy: each step adds
/// [`SEGMENT_BYTES`] random bytes before encoding. Uniqueness across
/// issuances is probabilistic.
#[derive(Debug, Clone)]
pub struct TokenGenerator {
    length_multiplier: usize,
}

impl TokenGenerator {
    /// Creates a generator with the given length multiplier (minimum 1).
    pub fn new(length_multiplier: usize) -> Self {
        Self {
            length_multiplier: length_multiplier.max(1),
        }
    }

    /// Produces a new opaque token string.
    pub fn generate(&self) -> String {
        let mut rng = rand::rng();
        let mut bytes = vec![0u8; SEGMENT_BYTES * self.length_multiplier];
        rng.fill(&mut bytes[..]);
        URL_SAFE_NO_PAD.encode(&bytes)
    }
}
