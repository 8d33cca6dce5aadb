use crate::{AuthError, IdentityProvider, Result as AuthErrorResult, SessionSnapshot};

use md_core::{ManagedIdentity, PublicMetadata};

use async_trait::async_trait;

/// Provider stand-in for environments without managed identity credentials.
/// Always loaded, never signed in; every write is rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct SignedOutIdentity;

#[async_trait]
impl IdentityProvider for SignedOutIdentity {
    fn session(&self) -> SessionSnapshot {
        SessionSnapshot::signed_out()
    }

    fn user(&self) -> Option<ManagedIdentity> {
        None
    }

    async fn update_name(&self, _first_name: &str, _last_name: &str) -> AuthErrorResult<()> {
        Err(AuthError::not_signed_in())
    }

    async fn update_public_metadata(&self, _metadata: &PublicMetadata) -> AuthErrorResult<()> {
        Err(AuthError::not_signed_in())
    }

    async fn sign_out(&self) -> AuthErrorResult<()> {
        Ok(())
    }
}
