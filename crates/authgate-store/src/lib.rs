//! # authgate-store
//!
//! Self-expiring in-memory token storage for Authgate.
//!
//! ## Modules
//!
//! - `ttl` — generic expiring key-value map with lazy expiry on read
//! - `sweeper` — periodic background compaction of expired entries
//! - `token` — the dual access/refresh token store
//!
//! Token data is memory-resident only and does not survive restart.

pub mod sweeper;
pub mod token;
pub mod ttl;

pub use sweeper::Sweeper;
pub use token::TokenStore;
pub use ttl::TtlMap;
