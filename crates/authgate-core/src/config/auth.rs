//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and token codec configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Deployment API key. Part of the password digest salt material.
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Deployment client ID. Part of the password digest salt material.
    #[serde(default = "default_client_id")]
    pub client_id: String,
    /// Controls opaque token length/complexity.
    #[serde(default = "default_length_multiplier")]
    pub token_length_multiplier: usize,
    /// Secret key for decoding encrypted token blobs.
    #[serde(default = "default_decode_key")]
    pub decode_key: String,
    /// Sentinel value the decoded token claim must match.
    #[serde(default = "default_expected_claim")]
    pub expected_claim: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            client_id: default_client_id(),
            token_length_multiplier: default_length_multiplier(),
            decode_key: default_decode_key(),
            expected_claim: default_expected_claim(),
        }
    }
}

fn default_api_key() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_client_id() -> String {
    "authgate".to_string()
}

fn default_length_multiplier() -> usize {
    3
}

fn default_decode_key() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_expected_claim() -> String {
    "HELLO_TEST".to_string()
}
