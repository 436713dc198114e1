//! Sources module
//!
//! Token sources and the acquisition cycle built on top of the cache store.

pub mod acquirer;
pub mod client_credentials;

use std::fmt;
use std::time::Duration;

use reqwest::Client;

use crate::config::settings::SettingsConfig;
use crate::errors::TokenError;

pub trait FetchToken {
    /// Perform a single token request and return the raw response body.
    fn fetch_token(
        &self,
        client: &Client,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, TokenError>> + Send;
}

/// Resolved identity of one OAuth2 client.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    /// token endpoint URL
    pub endpoint: String,
    pub client_id: String,
    pub client_secret: String,
}

impl ClientCredentials {
    pub fn new(
        endpoint: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("endpoint", &self.endpoint)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

/// Shared HTTP client for the run. A configured timeout bounds the whole request.
pub fn build_client(settings: &SettingsConfig) -> reqwest::Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout_ms) = settings.http_timeout_ms {
        builder = builder.timeout(Duration::from_millis(timeout_ms));
    }
    builder.build()
}
