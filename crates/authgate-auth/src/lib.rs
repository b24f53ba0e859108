//! # authgate-auth
//!
//! Credential verification and the token lifecycle for Authgate.
//!
//! ## Modules
//!
//! - `authenticator` — username/password verification against the user directory
//! - `directory` — user lookup contract and in-memory implementation
//! - `hasher` — keyed password digest computation
//! - `generator` — random opaque token strings
//! - `issuer` — token minting and the refresh flow
//! - `metrics` — token issuance counters
//! - `token_codec` — encrypted token decoding and claim validation

pub mod authenticator;
pub mod directory;
pub mod generator;
pub mod hasher;
pub mod issuer;
pub mod metrics;
pub mod token_codec;

pub use authenticator::Authenticator;
pub use directory::{MemoryUserDirectory, UserDirectory};
pub use generator::TokenGenerator;
pub use hasher::PasswordHasher;
pub use issuer::TokenIssuer;
pub use metrics::{AuthMetrics, MetricsSnapshot};
pub use token_codec::{CredentialDecoder, TokenDecoder, TokenEncoder};
