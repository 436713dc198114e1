pub mod cache_key;
pub mod cache_store;
pub mod credentials;
