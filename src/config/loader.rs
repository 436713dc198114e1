use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use crate::utils::constants::DEFAULT_CONFIG_FILE;

/// `$HOME/.oauth.toml`
pub fn default_config_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_CONFIG_FILE))
        .ok_or_else(|| anyhow!("cannot determine home directory for the default config file"))
}

/// Cache root for token slots: `$XDG_CACHE_HOME`, falling back to `$HOME/.cache`.
pub fn cache_root() -> Result<PathBuf> {
    cache_root_from(std::env::var_os("XDG_CACHE_HOME").map(PathBuf::from), dirs::home_dir())
}

fn cache_root_from(xdg_cache_home: Option<PathBuf>, home: Option<PathBuf>) -> Result<PathBuf> {
    match xdg_cache_home {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(dir),
        _ => home
            .as_deref()
            .map(|home: &Path| home.join(".cache"))
            .ok_or_else(|| anyhow!("cannot determine cache directory: neither XDG_CACHE_HOME nor HOME is set")),
    }
}
