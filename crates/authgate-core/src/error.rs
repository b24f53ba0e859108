//! Unified application error types for Authgate.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested user or token was not found.
    NotFound,
    /// The supplied password digest did not match the stored one.
    CredentialMismatch,
    /// The password digest primitive failed.
    Hashing,
    /// An encrypted token blob could not be parsed or verified.
    MalformedToken,
    /// The decoded token payload lacks the expected claim.
    ClaimMissing,
    /// The decoded claim value failed validation.
    ClaimInvalid,
    /// Input validation failed.
    Validation,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::CredentialMismatch => write!(f, "CREDENTIAL_MISMATCH"),
            Self::Hashing => write!(f, "HASHING"),
            Self::MalformedToken => write!(f, "MALFORMED_TOKEN"),
            Self::ClaimMissing => write!(f, "CLAIM_MISSING"),
            Self::ClaimInvalid => write!(f, "CLAIM_INVALID"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout Authgate.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a credential-mismatch error.
    pub fn credential_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialMismatch, message)
    }

    /// Create a hashing error.
    pub fn hashing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Hashing, message)
    }

    /// Create a malformed-token error.
    pub fn malformed_token(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedToken, message)
    }

    /// Create a claim-missing error.
    pub fn claim_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ClaimMissing, message)
    }

    /// Create a claim-invalid error.
    pub fn claim_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ClaimInvalid, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// True for kinds a transport must surface as one uniform login
    /// rejection. An unknown username and a wrong password are
    /// indistinguishable to the caller; the kinds differ only in
    /// server-side logs.
    pub fn is_login_rejection(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::NotFound | ErrorKind::CredentialMismatch
        )
    }

    /// True for kinds a transport must surface as one generic
    /// token-invalid rejection, without exposing which codec step failed.
    pub fn is_token_rejection(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::MalformedToken | ErrorKind::ClaimMissing | ErrorKind::ClaimInvalid
        )
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
