mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH`, falling back to `config.yaml`.
///
/// A missing default file yields built-in defaults; a missing file named
/// explicitly through `CONFIG_PATH` is an error.
pub async fn load() -> Result<Config> {
    match env::var("CONFIG_PATH") {
        Ok(path) => load_from(&path).await,
        Err(_) => match load_from(DEFAULT_CONFIG_PATH).await {
            Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
                Ok(Config::default())
            }
            other => other,
        },
    }
}

pub async fn load_from(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty document deserializes to unit, not to a map
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Command-line values win over whatever the file said.
    pub fn apply_overrides(&mut self, endpoint: Option<String>, timeout_secs: Option<u64>) {
        if let Some(endpoint) = endpoint {
            self.client.endpoint = endpoint;
        }
        if let Some(timeout_secs) = timeout_secs {
            self.client.timeout_secs = Some(timeout_secs);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.client.endpoint.trim().is_empty() {
            return Err(Error::config("client.endpoint must not be empty"));
        }
        if self.client.timeout_secs == Some(0) {
            return Err(Error::config("client.timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}
