//! Core configuration loader.

use std::path::Path;

use game_core::CoreConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for tuning values from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`CoreConfig`] from a TOML file.
    pub fn load(path: &Path) -> LoadResult<CoreConfig> {
        let content = read_file(path)?;
        let config: CoreConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
