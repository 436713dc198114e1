//! # OAuth2 client credentials token helper
//!
//! Fetches access tokens with the client credentials grant and keeps the last
//! response in a per-client cache file, so repeated invocations reuse it until
//! it is about to expire.
//!
//! Modules:
//! - `cache` — cache keys, token records and the file-backed cache store
//! - `sources` — client credentials exchange and the acquisition cycle
//! - `config` — config file and settings
//! - `utils` — logging, output and shared constants

pub mod cache;
pub mod config;
pub mod errors;
pub mod sources;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::cache::cache_store::CacheStore;
pub use crate::cache::credentials::{CredentialsRecord, ObtainedToken};
pub use crate::errors::TokenError;
pub use crate::sources::acquirer::TokenAcquirer;
pub use crate::sources::ClientCredentials;
