use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

use crate::providers::currencylayer::QuoteClient;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub access_key: String,
    #[serde(default)]
    pub currencies: Vec<String>,
    #[serde(default)]
    pub source: String,
    pub format: Option<String>,
    pub base_url: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("net", "apilayer", "currencylayer")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Base URL override for the client; empty selects the built-in default.
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or_default()
    }

    pub fn to_client(&self) -> QuoteClient {
        let mut client = QuoteClient::new();
        client.set_access_key(&self.access_key);
        client.set_currencies(&self.currencies);
        client.set_source(&self.source);
        if let Some(format) = &self.format {
            client.set_format(format);
        }
        client
    }
}
