//! Shared constants and invariants

/// Subtracted from a token's lifetime so it is never handed out right before it expires.
pub const SKEW_BUFFER_SECONDS: i64 = 10;

/// Directory under the user cache root that holds token slots.
pub const CACHE_DIR_NAME: &str = "oauth2_token";

/// Config file looked up in the home directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".oauth.toml";

pub const DEFAULT_LOG_LEVEL: &str = "warn";
