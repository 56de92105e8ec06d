use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_DIRECTORY};

use serde::Deserialize;

/// Where persisted tokens live
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for token files, relative to the config directory unless absolute
    pub dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIRECTORY),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.trim().is_empty() {
            return Err(ConfigError::storage("storage.dir cannot be empty"));
        }

        Ok(())
    }
}
