//! Verifies signed token blobs and decrypted credential payloads.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use authgate_core::config::AuthConfig;
use authgate_core::error::{AppError, ErrorKind};
use authgate_entity::Credentials;

use crate::token_codec::TOKEN_CLAIM;

/// Joins the API key and client ID into the credential decryption key.
const CREDENTIAL_KEY_FILLER: &str = ".";

fn lenient_validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    // The payload carries no exp; lifetimes are tracked store-side.
    validation.validate_exp = false;
    validation.required_spec_claims.clear();
    validation
}

/// Verifies token blobs and extracts the embedded token claim.
pub struct TokenDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
    expected_claim: String,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("decoding_key", &"[REDACTED]")
            .field("expected_claim", &self.expected_claim)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a decoder keyed and configured from `config`.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(config.decode_key.as_bytes()),
            validation: lenient_validation(),
            expected_claim: config.expected_claim.clone(),
        }
    }

    /// Verifies `blob` and returns the token claim value.
    ///
    /// Rejects blobs that fail signature verification, lack the token
    /// claim, carry a non-string claim, or carry a claim that does not
    /// match the expected value.
    pub fn decode(&self, blob: &str) -> Result<String, AppError> {
        let data = decode::<serde_json::Value>(blob, &self.decoding_key, &self.validation)
            .map_err(|err| {
                AppError::with_source(
                    ErrorKind::MalformedToken,
                    "Token blob failed verification",
                    err,
                )
            })?;

        let claim = data
            .claims
            .get(TOKEN_CLAIM)
            .ok_or_else(|| AppError::claim_missing(format!("Missing claim: {TOKEN_CLAIM}")))?;

        let value = claim
            .as_str()
            .ok_or_else(|| AppError::claim_invalid("Token claim is not a string"))?;

        if value != self.expected_claim {
            return Err(AppError::claim_invalid("Token claim has unexpected value"));
        }

        Ok(value.to_string())
    }
}

/// Decrypts credential payloads sent by peers.
///
/// The key is derived from the deployment's API key and client ID, so
/// only peers provisioned with both can produce a payload we accept.
pub struct CredentialDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for CredentialDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialDecoder")
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}

impl CredentialDecoder {
    /// Creates a decoder keyed with `api_key.client_id` from `config`.
    pub fn new(config: &AuthConfig) -> Self {
        let key = format!(
            "{}{}{}",
            config.api_key, CREDENTIAL_KEY_FILLER, config.client_id
        );
        Self {
            decoding_key: DecodingKey::from_secret(key.as_bytes()),
            validation: lenient_validation(),
        }
    }

    /// Verifies `blob` and returns the credentials it carries.
    pub fn decode(&self, blob: &str) -> Result<Credentials, AppError> {
        let data =
            decode::<Credentials>(blob, &self.decoding_key, &self.validation).map_err(|err| {
                AppError::with_source(
                    ErrorKind::MalformedToken,
                    "Credential blob failed verification",
                    err,
                )
            })?;
        Ok(data.claims)
    }
}
