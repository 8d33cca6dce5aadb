use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, IdentityConfig, LoggingConfig, RoutesConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub identity: IdentityConfig,
    pub api: ApiConfig,
    pub routes: RoutesConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for MD_CONFIG_DIR env var, else use ./.mundoctor/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply MD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: MD_CONFIG_DIR env var > ./.mundoctor/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all sections. Call after load() to catch errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.storage.validate()?;
        self.identity.validate()?;
        self.api.validate()?;
        self.routes.validate()?;
        Ok(())
    }

    /// Absolute path to the key-value storage file
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.path))
    }

    /// Absolute path to the log file, if file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(Self::config_dir()?.join(file))),
            None => Ok(None),
        }
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  storage: {} (legacy key '{}')",
            self.storage.path, self.storage.legacy_user_key
        );
        info!(
            "  identity: {} ({})",
            self.identity.api_url,
            if self.identity.is_configured() {
                "secret key set"
            } else {
                "no secret key, signed out"
            }
        );
        info!("  api: {}", self.api.base_url);
        info!(
            "  routes: professional={}, admin={}, root={}",
            self.routes.professional_dashboard, self.routes.admin_dashboard, self.routes.root
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Storage
        Self::apply_env_string("MD_STORAGE_PATH", &mut self.storage.path);
        Self::apply_env_string(
            "MD_STORAGE_LEGACY_USER_KEY",
            &mut self.storage.legacy_user_key,
        );

        // Identity
        Self::apply_env_string("MD_IDENTITY_API_URL", &mut self.identity.api_url);
        Self::apply_env_option_string("MD_IDENTITY_SECRET_KEY", &mut self.identity.secret_key);

        // Api
        Self::apply_env_string("MD_API_BASE_URL", &mut self.api.base_url);

        // Routes
        Self::apply_env_string(
            "MD_ROUTES_PROFESSIONAL_DASHBOARD",
            &mut self.routes.professional_dashboard,
        );
        Self::apply_env_string("MD_ROUTES_ADMIN_DASHBOARD", &mut self.routes.admin_dashboard);
        Self::apply_env_string("MD_ROUTES_ROOT", &mut self.routes.root);

        // Logging
        Self::apply_env_parse("MD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("MD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("MD_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
