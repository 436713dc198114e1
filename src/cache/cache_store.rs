use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeDelta, Utc};
use tokio::fs;
use tracing::{debug, warn};

use crate::cache::cache_key::CacheKey;
use crate::cache::credentials::{CredentialsRecord, ObtainedToken};
use crate::errors::TokenError;
use crate::utils::constants::{CACHE_DIR_NAME, SKEW_BUFFER_SECONDS};

/// File-backed token cache: one JSON file per `(endpoint, client_id)`.
///
/// The file's modification time is the record's issuance marker, so the payload
/// is stored exactly as the token endpoint returned it.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

/// Location of a single cached record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSlot {
    pub key: CacheKey,
    pub path: PathBuf,
}

impl CacheStore {
    /// `cache_root` is the user cache directory; slots live in its `oauth2_token` child.
    pub fn new(cache_root: impl AsRef<Path>) -> Self {
        Self {
            dir: cache_root.as_ref().join(CACHE_DIR_NAME),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Compute the slot for a client and make sure its directory exists.
    ///
    /// A directory that cannot be created is only logged here: the following
    /// write reports the real failure.
    pub async fn locate(&self, endpoint: &str, client_id: &str) -> CacheSlot {
        if let Err(err) = create_cache_dir(&self.dir).await {
            warn!(dir = %self.dir.display(), error = %err, "failed to create cache directory");
        }
        let key = CacheKey::new(endpoint, client_id);
        let path = self.dir.join(key.file_name());
        CacheSlot { key, path }
    }

    pub async fn is_valid(&self, slot: &CacheSlot) -> bool {
        self.is_valid_at(slot, Utc::now()).await
    }

    /// `false` means "refresh": missing, unreadable or unparsable slots are never an error.
    pub async fn is_valid_at(&self, slot: &CacheSlot, now: DateTime<Utc>) -> bool {
        let bytes = match fs::read(&slot.path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!(path = %slot.path.display(), error = %err, "cache slot not readable");
                return false;
            }
        };
        let record = match CredentialsRecord::from_slice(&bytes) {
            Ok(record) => record,
            Err(err) => {
                debug!(path = %slot.path.display(), error = %err, "cache slot not parsable");
                return false;
            }
        };
        let written_at = match fs::metadata(&slot.path).await.and_then(|meta| meta.modified()) {
            Ok(modified) => DateTime::<Utc>::from(modified),
            Err(err) => {
                debug!(path = %slot.path.display(), error = %err, "cache slot has no mtime");
                return false;
            }
        };

        match refresh_at(written_at, record.expires_in) {
            Some(refresh_at) => {
                debug!(key = %slot.key, %refresh_at, "cache slot checked");
                now < refresh_at
            }
            None => false,
        }
    }

    /// Replace the slot content with `payload`.
    ///
    /// The payload lands in a private sibling file first and is renamed over the slot.
    pub async fn write(&self, slot: &CacheSlot, payload: &[u8]) -> Result<(), TokenError> {
        let tmp = slot.path.with_extension("json.tmp");
        let result = write_private(&tmp, &slot.path, payload).await;
        if result.is_err() {
            let _ = fs::remove_file(&tmp).await;
        }
        result.map_err(|source| TokenError::CacheWrite {
            path: slot.path.clone(),
            source,
        })
    }

    pub async fn read(&self, slot: &CacheSlot) -> Result<ObtainedToken, TokenError> {
        let raw = fs::read(&slot.path)
            .await
            .map_err(|source| TokenError::CacheRead {
                path: slot.path.clone(),
                source,
            })?;
        let record = CredentialsRecord::from_slice(&raw).map_err(|source| TokenError::Decode {
            path: slot.path.clone(),
            source,
        })?;
        Ok(ObtainedToken { record, raw })
    }
}

/// Point in time from which a record written at `written_at` must be refreshed.
/// `None` when the arithmetic leaves chrono's range, which counts as expired.
pub fn refresh_at(written_at: DateTime<Utc>, expires_in: i64) -> Option<DateTime<Utc>> {
    let lifetime = expires_in.checked_sub(SKEW_BUFFER_SECONDS)?;
    written_at.checked_add_signed(TimeDelta::try_seconds(lifetime)?)
}

async fn create_cache_dir(dir: &Path) -> std::io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o750);
    builder.create(dir).await
}

async fn write_private(tmp: &Path, path: &Path, payload: &[u8]) -> std::io::Result<()> {
    fs::write(tmp, payload).await?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(tmp, std::fs::Permissions::from_mode(0o600)).await?;
    }
    fs::rename(tmp, path).await
}
