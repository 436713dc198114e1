use serde::{Deserialize, Serialize};

/// Token endpoint response as stored in a cache slot.
///
/// Only the fields this tool needs are decoded. The slot keeps the raw bytes, so
/// anything else the server sent (`scope`, ...) survives untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsRecord {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    /// seconds, counted from the slot's last write; absent means already expired
    #[serde(default)]
    pub expires_in: i64,
}

impl CredentialsRecord {
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

/// Result of a token acquisition: the decoded record plus the payload exactly as cached.
#[derive(Debug, Clone)]
pub struct ObtainedToken {
    pub record: CredentialsRecord,
    pub raw: Vec<u8>,
}

impl ObtainedToken {
    pub fn raw_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.raw)
    }
}
