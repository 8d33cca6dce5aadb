use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ADMIN_DASHBOARD, DEFAULT_PROFESSIONAL_DASHBOARD,
    DEFAULT_ROOT_PATH,
};

use serde::Deserialize;

/// Landing paths after login, per role
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    pub professional_dashboard: String,
    pub admin_dashboard: String,
    pub root: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            professional_dashboard: String::from(DEFAULT_PROFESSIONAL_DASHBOARD),
            admin_dashboard: String::from(DEFAULT_ADMIN_DASHBOARD),
            root: String::from(DEFAULT_ROOT_PATH),
        }
    }
}

impl RoutesConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, path) in [
            ("professional_dashboard", &self.professional_dashboard),
            ("admin_dashboard", &self.admin_dashboard),
            ("root", &self.root),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::routes(format!(
                    "routes.{} must start with '/', got '{}'",
                    name, path
                )));
            }
        }
        Ok(())
    }
}
