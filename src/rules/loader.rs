//! Load game balance from TOML files

use std::fs;
use std::path::Path;

use crate::core::config::GameConfig;
use crate::core::error::Result;

/// Load and validate a [`GameConfig`] from a TOML file
pub fn load_config(path: &Path) -> Result<GameConfig> {
    let content = fs::read_to_string(path)?;
    let config = GameConfig::from_toml_str(&content)?;
    tracing::debug!("Loaded game config from {}", path.display());
    Ok(config)
}

/// Load from `path` when given, otherwise fall back to the shipped balance
pub fn load_config_or_default(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(GameConfig::default()),
    }
}
