//! Produces signed blobs in the format the decoders accept.

use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;

use authgate_core::config::AuthConfig;
use authgate_core::error::{AppError, ErrorKind};

/// Signs claim payloads into compact blobs.
pub struct TokenEncoder {
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for TokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEncoder")
            .field("encoding_key", &"[REDACTED]")
            .finish()
    }
}

impl TokenEncoder {
    /// Creates an encoder keyed from `config`.
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_key(&config.decode_key)
    }

    /// Creates an encoder with an explicit secret.
    pub fn with_key(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Signs `claims` into a compact blob.
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key).map_err(|err| {
            AppError::with_source(ErrorKind::Internal, "Failed to encode token blob", err)
        })
    }
}
