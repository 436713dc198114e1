use std::collections::HashMap;
use std::fmt;

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::config::settings::SettingsConfig;
use crate::sources::ClientCredentials;

/// ================================
/// Full configuration file
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct OAuthConfig {
    #[serde(default)]
    pub settings: SettingsConfig,
    #[serde(default, rename = "client")]
    pub clients: HashMap<String, ClientConfig>,
}

/// One `[client.<name>]` table.
#[derive(Deserialize, Clone)]
pub struct ClientConfig {
    /// token endpoint
    pub base: String,
    pub id: String,
    pub secret: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base", &self.base)
            .field("id", &self.id)
            .field("secret", &"***")
            .finish()
    }
}

impl OAuthConfig {
    /// Resolve a client by name into the credentials the acquirer works with.
    pub fn credentials(&self, name: &str) -> Result<ClientCredentials> {
        let Some(client) = self.clients.get(name) else {
            bail!("client name '{name}' not found in config file");
        };
        if client.base.trim().is_empty() {
            bail!("client '{name}' has an empty 'base' endpoint");
        }
        if client.id.trim().is_empty() {
            bail!("client '{name}' has an empty 'id'");
        }
        Ok(ClientCredentials::new(
            client.base.as_str(),
            client.id.as_str(),
            client.secret.as_str(),
        ))
    }
}
