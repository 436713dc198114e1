use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{debug, info};

use crate::cache::cache_store::CacheStore;
use crate::cache::credentials::{CredentialsRecord, ObtainedToken};
use crate::errors::TokenError;
use crate::sources::{ClientCredentials, FetchToken};

/// Hands out a currently valid token, going to the network only when the cache
/// slot for the client cannot be used.
#[derive(Debug, Clone)]
pub struct TokenAcquirer {
    client: Client,
    store: CacheStore,
}

impl TokenAcquirer {
    pub fn new(client: Client, store: CacheStore) -> Self {
        Self { client, store }
    }

    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    pub async fn obtain(&self, credentials: &ClientCredentials) -> Result<ObtainedToken, TokenError> {
        self.obtain_at(credentials, Utc::now()).await
    }

    /// The slot is overwritten only after a `200 OK` exchange whose body decodes, and the
    /// result is always read back from the slot rather than taken from memory.
    pub async fn obtain_at(
        &self,
        credentials: &ClientCredentials,
        now: DateTime<Utc>,
    ) -> Result<ObtainedToken, TokenError> {
        let slot = self
            .store
            .locate(&credentials.endpoint, &credentials.client_id)
            .await;

        if self.store.is_valid_at(&slot, now).await {
            debug!(path = %slot.path.display(), "using cached token");
        } else {
            let payload = credentials.fetch_token(&self.client).await?;
            CredentialsRecord::from_slice(&payload).map_err(|source| {
                TokenError::InvalidResponse {
                    endpoint: credentials.endpoint.clone(),
                    source,
                }
            })?;
            self.store.write(&slot, &payload).await?;
            info!(path = %slot.path.display(), "cached new token");
        }

        self.store.read(&slot).await
    }
}
