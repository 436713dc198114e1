use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{debug, error};

use crate::config::clients::OAuthConfig;

/// Load a config file: `${VAR}` placeholders are expanded first, then the content
/// is parsed as YAML for `.yaml`/`.yml` files and as TOML otherwise.
pub async fn file_to_config(path: &Path) -> Result<OAuthConfig> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;

    let expanded = expand_env_vars(&content)?;
    parse_config(&expanded, ConfigFormat::of(path))
        .with_context(|| format!("failed to parse config file '{}'", path.display()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    pub fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Toml,
        }
    }
}

pub fn parse_config(content: &str, format: ConfigFormat) -> Result<OAuthConfig> {
    debug!(?format, "parsing config");
    let config: OAuthConfig = match format {
        ConfigFormat::Toml => toml::from_str::<OAuthConfig>(content).map_err(anyhow::Error::from),
        ConfigFormat::Yaml => serde_yaml::from_str::<OAuthConfig>(content).map_err(anyhow::Error::from),
    }
    .inspect_err(|e| error!("parse config error: {}", e))?;
    Ok(config)
}

fn expand_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}")?;
    Ok(re
        .replace_all(input, |caps: &regex::Captures| {
            let var = &caps[1];
            let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            std::env::var(var).unwrap_or_else(|_| default.to_string())
        })
        .to_string())
}
