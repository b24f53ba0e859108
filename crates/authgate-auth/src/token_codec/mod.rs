//! Encrypted token decoding and claim validation.
//!
//! Peers hand us compact JWT blobs; the decoder verifies the signature,
//! extracts the token claim, and checks it against the expected value.
//! The encoder exists for tests and for peers that need to produce the
//! same blobs.

pub mod decoder;
pub mod encoder;

pub use decoder::{CredentialDecoder, TokenDecoder};
pub use encoder::TokenEncoder;

/// Claim name carrying the token payload.
pub(crate) const TOKEN_CLAIM: &str = "token";
