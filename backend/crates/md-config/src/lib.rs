mod api_config;
mod config;
mod error;
mod identity_config;
mod log_level;
mod logging_config;
mod routes_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use identity_config::IdentityConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use routes_config::RoutesConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "MD_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".mundoctor";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORAGE_FILENAME: &str = "storage.json";
const DEFAULT_LEGACY_USER_KEY: &str = "mundoctor_user";
const DEFAULT_IDENTITY_API_URL: &str = "https://api.clerk.com";
const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3001/api";
const DEFAULT_PROFESSIONAL_DASHBOARD: &str = "/professional/dashboard";
const DEFAULT_ADMIN_DASHBOARD: &str = "/admin/dashboard";
const DEFAULT_ROOT_PATH: &str = "/";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
