//! # authgate-entity
//!
//! Domain entity models for Authgate.

pub mod credentials;
pub mod token;
pub mod user;

pub use credentials::Credentials;
pub use token::TokenRecord;
pub use user::UserIdentity;
