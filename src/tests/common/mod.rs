// tests/common/mod.rs
pub use httpmock::Method::POST;
pub use httpmock::{Mock, MockServer};

use reqwest::Client;
use tempfile::TempDir;

use crate::cache::cache_store::CacheStore;
use crate::sources::acquirer::TokenAcquirer;
use crate::sources::ClientCredentials;

pub const TOKEN_PATH: &str = "/token";
pub const T1_BODY: &str = r#"{"access_token":"T1","token_type":"Bearer","expires_in":300}"#;
pub const T2_BODY: &str = r#"{"access_token":"T2","token_type":"Bearer","expires_in":300}"#;

/// Acquirer over a throwaway cache root. Keep the `TempDir` alive for the test.
pub fn acquirer() -> (TempDir, TokenAcquirer) {
    let root = TempDir::new().expect("tempdir");
    let acquirer = TokenAcquirer::new(build_reqwest_client(), CacheStore::new(root.path()));
    (root, acquirer)
}

pub fn credentials(server: &MockServer, client_id: &str) -> ClientCredentials {
    ClientCredentials::new(server.url(TOKEN_PATH), client_id, "xyz")
}

/// Token endpoint answering every POST with `status` and `body`.
pub async fn token_endpoint<'a>(server: &'a MockServer, status: u16, body: &str) -> Mock<'a> {
    server
        .mock_async(|when, then| {
            when.method(POST).path(TOKEN_PATH);
            then.status(status)
                .header("Content-Type", "application/json")
                .body(body);
        })
        .await
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}
