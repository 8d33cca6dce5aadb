//! Port for the managed identity provider.
//!
//! The reconciler reads the session and user snapshots on every call and
//! only ever writes the name fields and public metadata.

use crate::{Result as AuthErrorResult, SessionSnapshot};

use md_core::{ManagedIdentity, PublicMetadata};

use async_trait::async_trait;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn session(&self) -> SessionSnapshot;

    /// Current user profile, `None` while signed out or loading
    fn user(&self) -> Option<ManagedIdentity>;

    async fn update_name(&self, first_name: &str, last_name: &str) -> AuthErrorResult<()>;

    /// Replace the public metadata document with `metadata`
    async fn update_public_metadata(&self, metadata: &PublicMetadata) -> AuthErrorResult<()>;

    async fn sign_out(&self) -> AuthErrorResult<()>;
}
