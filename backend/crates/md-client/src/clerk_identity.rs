//! [`IdentityProvider`] backed by the Clerk Backend API.
//!
//! The user is fetched once by [`ClerkIdentity::load`] and cached; every
//! successful write replaces the cache with the user Clerk returns.

use crate::ClerkClient;

use md_auth::{AuthError, IdentityProvider, Result as AuthErrorResult, SessionSnapshot};
use md_core::{ManagedIdentity, PublicMetadata};

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use log::{info, warn};

#[derive(Debug, Default)]
struct ClerkState {
    loaded: bool,
    user: Option<ManagedIdentity>,
}

pub struct ClerkIdentity {
    client: ClerkClient,
    user_id: Option<String>,
    session_id: Option<String>,
    state: RwLock<ClerkState>,
}

impl ClerkIdentity {
    /// Not loaded until [`Self::load`] runs
    pub fn new(client: ClerkClient, user_id: Option<String>, session_id: Option<String>) -> Self {
        Self {
            client,
            user_id,
            session_id,
            state: RwLock::new(ClerkState::default()),
        }
    }

    pub async fn connect(
        client: ClerkClient,
        user_id: Option<String>,
        session_id: Option<String>,
    ) -> Self {
        let identity = Self::new(client, user_id, session_id);
        identity.load().await;
        identity
    }

    /// Fetch the configured user. A failed fetch leaves the provider loaded
    /// but signed out. Returns whether a user is now cached.
    pub async fn load(&self) -> bool {
        let user = match &self.user_id {
            Some(user_id) => match self.client.get_user(user_id).await {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!("Could not load Clerk user {}: {}", user_id, e);
                    None
                }
            },
            None => None,
        };

        let signed_in = user.is_some();
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.user = user;
        state.loaded = true;
        signed_in
    }

    fn active_user_id(&self) -> AuthErrorResult<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .user
            .as_ref()
            .map(|user| user.id.clone())
            .ok_or_else(AuthError::not_signed_in)
    }

    fn replace_user(&self, user: Option<ManagedIdentity>) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .user = user;
    }
}

#[async_trait]
impl IdentityProvider for ClerkIdentity {
    fn session(&self) -> SessionSnapshot {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        SessionSnapshot {
            is_loaded: state.loaded,
            is_signed_in: state.user.is_some(),
            user_id: state.user.as_ref().map(|user| user.id.clone()),
        }
    }

    fn user(&self) -> Option<ManagedIdentity> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .user
            .clone()
    }

    async fn update_name(&self, first_name: &str, last_name: &str) -> AuthErrorResult<()> {
        let user_id = self.active_user_id()?;
        let updated = self
            .client
            .update_user_name(&user_id, first_name, last_name)
            .await?;
        self.replace_user(Some(updated));
        Ok(())
    }

    async fn update_public_metadata(&self, metadata: &PublicMetadata) -> AuthErrorResult<()> {
        let user_id = self.active_user_id()?;
        let updated = self
            .client
            .update_public_metadata(&user_id, metadata)
            .await?;
        self.replace_user(Some(updated));
        Ok(())
    }

    async fn sign_out(&self) -> AuthErrorResult<()> {
        if let Some(session_id) = &self.session_id {
            self.client.revoke_session(session_id).await?;
            info!("Revoked Clerk session {}", session_id);
        }
        self.replace_user(None);
        Ok(())
    }
}
