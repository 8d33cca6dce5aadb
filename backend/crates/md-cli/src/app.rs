//! Command execution against a configured reconciler.

use crate::{CliErrorResult, Commands};

use md_auth::{
    IdentityProvider, IdentityReconciler, JsonFileStore, KeyValueStore, ReconcilerConfig,
    RoleRoutes, SignedOutIdentity,
};
use md_client::{ClerkClient, ClerkIdentity, ProfileClient};
use md_config::Config;
use md_core::{LegacyUserRecord, Role};

use std::sync::Arc;

use log::{info, warn};
use serde_json::{Value, json};

pub struct App {
    reconciler: IdentityReconciler,
    profiles: ProfileClient,
}

impl App {
    /// Build the reconciler from its collaborators and load the legacy record
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        store: Arc<dyn KeyValueStore>,
        config: ReconcilerConfig,
        profiles: ProfileClient,
    ) -> Self {
        let reconciler = IdentityReconciler::new(provider, store, config);
        let status = reconciler.initialize();
        info!("Legacy record load: {:?}", status);
        Self {
            reconciler,
            profiles,
        }
    }

    /// Build from loaded configuration. Without a secret key the managed
    /// identity is treated as signed out.
    pub async fn from_config(
        config: &Config,
        user_id: Option<String>,
        session_id: Option<String>,
    ) -> CliErrorResult<Self> {
        let store = JsonFileStore::new(config.storage_path()?);

        let provider: Arc<dyn IdentityProvider> = match &config.identity.secret_key {
            Some(secret_key) => {
                let client = ClerkClient::new(&config.identity.api_url, secret_key);
                Arc::new(ClerkIdentity::connect(client, user_id, session_id).await)
            }
            None => {
                if user_id.is_some() {
                    warn!("--user-id ignored: identity.secret_key is not configured");
                }
                Arc::new(SignedOutIdentity)
            }
        };

        let reconciler_config = ReconcilerConfig {
            legacy_user_key: config.storage.legacy_user_key.clone(),
            routes: RoleRoutes {
                professional_dashboard: config.routes.professional_dashboard.clone(),
                admin_dashboard: config.routes.admin_dashboard.clone(),
                root: config.routes.root.clone(),
            },
        };

        Ok(Self::new(
            provider,
            Arc::new(store),
            reconciler_config,
            ProfileClient::new(&config.api.base_url),
        ))
    }

    /// Run one command and return its JSON result
    pub async fn run(&self, command: Commands) -> CliErrorResult<Value> {
        let value = match command {
            Commands::Status => to_value(&self.reconciler.auth_state())?,

            Commands::Migrate => {
                let report = self.reconciler.try_migrate().await?;
                json!({ "migrated": true, "report": to_value(&report)? })
            }

            Commands::ClearLegacy => {
                self.reconciler.clear_legacy_data();
                json!({ "cleared": true })
            }

            Commands::LegacyLogin {
                id,
                name,
                email,
                role,
            } => {
                let role: Role = role.parse()?;
                let record = LegacyUserRecord::new(id, name, email, role);
                let mut redirect = None;
                self.reconciler
                    .legacy_login(record, |path| redirect = Some(path.to_string()))?;
                json!({ "redirect": redirect })
            }

            Commands::LegacyLogout => {
                let mut redirect = None;
                self.reconciler
                    .legacy_logout(|path| redirect = Some(path.to_string()));
                json!({ "redirect": redirect })
            }

            Commands::SignOut => {
                let mut redirect = None;
                let signed_out = self
                    .reconciler
                    .sign_out(|path| redirect = Some(path.to_string()))
                    .await;
                json!({ "signedOut": signed_out, "redirect": redirect })
            }

            Commands::HasRole { roles } => {
                let roles = roles
                    .iter()
                    .map(|role| role.parse::<Role>())
                    .collect::<Result<Vec<_>, _>>()?;
                json!({ "hasRole": self.reconciler.has_role(roles) })
            }

            Commands::Redirect { role } => {
                json!({ "redirect": self.reconciler.get_role_redirect_url(&role) })
            }

            Commands::Profile => match self.reconciler.clerk_user() {
                Some(identity) => to_value(&self.profiles.profile_or_fallback(&identity).await)?,
                None => to_value(&self.reconciler.user())?,
            },

            Commands::Debug => to_value(&self.reconciler.debug())?,
        };

        Ok(value)
    }
}

#[track_caller]
fn to_value<T: serde::Serialize>(value: &T) -> CliErrorResult<Value> {
    serde_json::to_value(value).map_err(crate::CliError::output)
}
