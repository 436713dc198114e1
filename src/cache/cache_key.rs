use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;

/// Separates endpoint and client id before encoding. A newline can never be part of a
/// usable endpoint URL, so two configurations only share a key when both parts match.
const KEY_SEPARATOR: char = '\n';

/// Stable, filename-safe identity of one `(endpoint, client_id)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(endpoint: &str, client_id: &str) -> Self {
        let identity = format!("{endpoint}{KEY_SEPARATOR}{client_id}");
        Self(URL_SAFE.encode(identity.as_bytes()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
