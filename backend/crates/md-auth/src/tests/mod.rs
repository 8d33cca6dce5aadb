
use crate::{
    AuthError, IdentityProvider, IdentityReconciler, MemoryStore, ReconcilerConfig,
    Result as AuthErrorResult, SessionSnapshot,
};

use md_core::{EmailAddress, LegacyUserRecord, ManagedIdentity, PublicMetadata, Role};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

pub(crate) const LEGACY_KEY: &str = "mundoctor_user";

/// Scriptable identity provider that records every write
#[derive(Default)]
pub(crate) struct FakeIdentity {
    pub(crate) state: Mutex<FakeIdentityState>,
    /// When set, name updates wait for a notification before proceeding
    name_gate: Option<Arc<Notify>>,
}

#[derive(Default)]
pub(crate) struct FakeIdentityState {
    pub(crate) session: SessionSnapshot,
    pub(crate) user: Option<ManagedIdentity>,
    pub(crate) fail_name_update: bool,
    pub(crate) fail_metadata_update: bool,
    pub(crate) fail_sign_out: bool,
    pub(crate) name_updates: Vec<(String, String)>,
    pub(crate) metadata_updates: Vec<PublicMetadata>,
    pub(crate) sign_outs: usize,
}

impl FakeIdentity {
    pub(crate) fn loading() -> Self {
        Self::default()
    }

    pub(crate) fn signed_out() -> Self {
        let fake = Self::default();
        fake.state.lock().unwrap().session = SessionSnapshot::signed_out();
        fake
    }

    pub(crate) fn signed_in(user: ManagedIdentity) -> Self {
        let fake = Self::default();
        {
            let mut state = fake.state.lock().unwrap();
            state.session = SessionSnapshot::signed_in(user.id.clone());
            state.user = Some(user);
        }
        fake
    }

    pub(crate) fn sign_in(&self, user: ManagedIdentity) {
        let mut state = self.state.lock().unwrap();
        state.session = SessionSnapshot::signed_in(user.id.clone());
        state.user = Some(user);
    }

    pub(crate) fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.name_gate = Some(gate);
        self
    }

    pub(crate) fn with<R>(&self, f: impl FnOnce(&mut FakeIdentityState) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentity {
    fn session(&self) -> SessionSnapshot {
        self.state.lock().unwrap().session.clone()
    }

    fn user(&self) -> Option<ManagedIdentity> {
        self.state.lock().unwrap().user.clone()
    }

    async fn update_name(&self, first_name: &str, last_name: &str) -> AuthErrorResult<()> {
        if let Some(gate) = &self.name_gate {
            gate.notified().await;
        }
        let mut state = self.state.lock().unwrap();
        if state.fail_name_update {
            return Err(AuthError::provider("name update rejected"));
        }
        state
            .name_updates
            .push((first_name.to_string(), last_name.to_string()));
        if let Some(user) = state.user.as_mut() {
            user.first_name = Some(first_name.to_string());
            user.last_name = Some(last_name.to_string());
        }
        Ok(())
    }

    async fn update_public_metadata(&self, metadata: &PublicMetadata) -> AuthErrorResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_metadata_update {
            return Err(AuthError::provider("metadata update rejected"));
        }
        state.metadata_updates.push(metadata.clone());
        if let Some(user) = state.user.as_mut() {
            user.public_metadata = metadata.clone();
        }
        Ok(())
    }

    async fn sign_out(&self) -> AuthErrorResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_sign_out {
            return Err(AuthError::provider("sign-out rejected"));
        }
        state.sign_outs += 1;
        state.session = SessionSnapshot::signed_out();
        state.user = None;
        Ok(())
    }
}

pub(crate) fn managed_user(id: &str, role: Option<Role>) -> ManagedIdentity {
    ManagedIdentity {
        id: id.to_string(),
        first_name: Some("Clerk".to_string()),
        last_name: Some("User".to_string()),
        email_addresses: vec![EmailAddress {
            email_address: "clerk@x.com".to_string(),
            verification_status: Some("verified".to_string()),
        }],
        phone_numbers: Vec::new(),
        image_url: None,
        public_metadata: PublicMetadata {
            role,
            ..PublicMetadata::default()
        },
    }
}

pub(crate) fn juan() -> LegacyUserRecord {
    LegacyUserRecord::new("u1", "Juan Pérez", "juan@x.com", Role::Professional)
}

pub(crate) fn store_with(record: &LegacyUserRecord) -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_item(
        LEGACY_KEY,
        &record.to_json().unwrap(),
    ))
}

/// Reconciler over the given fakes, already initialized
pub(crate) fn reconciler(
    identity: &Arc<FakeIdentity>,
    store: &Arc<MemoryStore>,
) -> IdentityReconciler {
    let reconciler = IdentityReconciler::new(
        identity.clone(),
        store.clone(),
        ReconcilerConfig::default(),
    );
    reconciler.initialize();
    reconciler
}
