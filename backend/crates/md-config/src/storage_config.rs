use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LEGACY_USER_KEY, DEFAULT_STORAGE_FILENAME,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Key-value file, relative to the config directory
    pub path: String,
    /// Key holding the serialized legacy user
    pub legacy_user_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_STORAGE_FILENAME),
            legacy_user_key: String::from(DEFAULT_LEGACY_USER_KEY),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::storage(
                "storage.path must be relative and cannot contain '..'",
            ));
        }

        if self.path.trim().is_empty() {
            return Err(ConfigError::storage("storage.path cannot be empty"));
        }

        if self.legacy_user_key.trim().is_empty() {
            return Err(ConfigError::storage(
                "storage.legacy_user_key cannot be empty",
            ));
        }

        Ok(())
    }
}
