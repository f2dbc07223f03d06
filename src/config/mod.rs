mod types;

pub use types::*;

use crate::Result;
use std::env;
use std::io::ErrorKind;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let config_str = match tokio::fs::read_to_string(&config_path).await {
        Ok(contents) => contents,
        // No config file is fine: the service runs entirely on defaults.
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(e.into()),
    };
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
