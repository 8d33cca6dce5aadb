use crate::{ConfigError, ConfigErrorResult, DEFAULT_IDENTITY_API_URL};

use serde::Deserialize;

const SECRET_KEY_PREFIX: &str = "sk_";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Clerk Backend API base URL
    pub api_url: String,
    /// Clerk secret key; without it the identity provider stays signed out
    pub secret_key: Option<String>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            api_url: String::from(DEFAULT_IDENTITY_API_URL),
            secret_key: None,
        }
    }
}

impl IdentityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.api_url) {
            return Err(ConfigError::identity(format!(
                "identity.api_url must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }

        if let Some(secret) = &self.secret_key
            && !secret.starts_with(SECRET_KEY_PREFIX)
        {
            return Err(ConfigError::identity(format!(
                "identity.secret_key must start with '{}'",
                SECRET_KEY_PREFIX
            )));
        }

        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.secret_key.is_some()
    }
}

pub(crate) fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
