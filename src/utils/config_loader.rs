use std::path::Path;

use anyhow::{anyhow, Result};

use crate::config::clients::OAuthConfig;
use crate::config::proc_loader::file_to_config;

pub async fn run(config_path: &Path) -> Result<OAuthConfig> {
    file_to_config(config_path).await.map_err(|e| anyhow!("Invalid config: {:#}", e))
}
