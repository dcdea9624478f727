pub mod types;

use std::path::Path;

use crate::error::Result;
use types::Config;

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = serde_yml::from_str(&content)?;
    Ok(config)
}
