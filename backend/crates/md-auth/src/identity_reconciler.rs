//! Reconciles the managed identity session with the legacy local-storage
//! login and migrates the latter into the former.

use crate::{
    AuthState, DebugSnapshot, IdentityProvider, IdentitySourceChain, KeyValueStore,
    LegacyLoadStatus, MigrationError, MigrationPlan, MigrationReport, MigrationStep,
    ReconcileInputs, ReconcilerConfig, Result as AuthErrorResult, RoleRequirement,
};

use md_core::{LegacyUserRecord, ManagedIdentity, UnifiedUser};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use log::{debug, error, info, warn};

#[derive(Debug, Default)]
struct LegacyState {
    status: LegacyLoadStatus,
    record: Option<LegacyUserRecord>,
}

pub struct IdentityReconciler {
    provider: Arc<dyn IdentityProvider>,
    store: Arc<dyn KeyValueStore>,
    config: ReconcilerConfig,
    sources: IdentitySourceChain,
    legacy: RwLock<LegacyState>,
    migration_in_flight: AtomicBool,
}

/// Clears the in-flight flag when a migration attempt ends, however it ends
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl IdentityReconciler {
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        store: Arc<dyn KeyValueStore>,
        config: ReconcilerConfig,
    ) -> Self {
        Self {
            provider,
            store,
            config,
            sources: IdentitySourceChain::default(),
            legacy: RwLock::new(LegacyState::default()),
            migration_in_flight: AtomicBool::new(false),
        }
    }

    /// Replace the resolution order
    pub fn with_sources(mut self, sources: IdentitySourceChain) -> Self {
        self.sources = sources;
        self
    }

    /// Load the legacy record once. Later calls return the first outcome.
    pub fn initialize(&self) -> LegacyLoadStatus {
        let mut state = self.legacy.write().unwrap_or_else(PoisonError::into_inner);
        if state.status.is_complete() {
            return state.status;
        }

        let key = &self.config.legacy_user_key;
        let (status, record) = match self.store.get_item(key) {
            Ok(None) => (LegacyLoadStatus::Absent, None),
            Ok(Some(raw)) => match LegacyUserRecord::from_json(&raw) {
                Ok(record) => {
                    debug!("Loaded legacy user {} from '{}'", record.id, key);
                    (LegacyLoadStatus::Loaded, Some(record))
                }
                Err(e) => {
                    warn!("Discarding malformed legacy user under '{}': {}", key, e);
                    if let Err(e) = self.store.remove_item(key) {
                        warn!("Failed to remove malformed legacy user: {}", e);
                    }
                    (LegacyLoadStatus::Malformed, None)
                }
            },
            Err(e) => {
                warn!("Legacy user storage unreadable, treating as absent: {}", e);
                (LegacyLoadStatus::Unreadable, None)
            }
        };

        state.status = status;
        state.record = record;
        status
    }

    pub fn legacy_load_status(&self) -> LegacyLoadStatus {
        self.legacy
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .status
    }

    pub fn legacy_user(&self) -> Option<LegacyUserRecord> {
        self.legacy
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .record
            .clone()
    }

    pub fn clerk_user(&self) -> Option<ManagedIdentity> {
        self.provider.user()
    }

    /// Current authentication state. Managed identity always outranks the
    /// legacy record; nothing is decided until both sources have loaded.
    pub fn auth_state(&self) -> AuthState {
        let session = self.provider.session();
        let legacy = self.legacy.read().unwrap_or_else(PoisonError::into_inner);

        if !session.is_loaded || !legacy.status.is_complete() {
            return AuthState::loading();
        }

        let managed_user = self.provider.user();
        let inputs = ReconcileInputs {
            session: &session,
            managed_user: managed_user.as_ref(),
            legacy: legacy.record.as_ref(),
        };

        match self.sources.resolve(&inputs) {
            Some(identity) => AuthState::resolved(identity),
            None => AuthState::anonymous(),
        }
    }

    pub fn user(&self) -> Option<UnifiedUser> {
        self.auth_state().user
    }

    pub fn has_role(&self, requirement: impl Into<RoleRequirement>) -> bool {
        let requirement = requirement.into();
        self.user()
            .is_some_and(|user| requirement.is_satisfied_by(user.role))
    }

    pub fn get_role_redirect_url(&self, role: &str) -> &str {
        self.config.routes.landing_path_for(role)
    }

    /// Boolean form of [`Self::try_migrate`]; failures are logged
    pub async fn migrate_to_clerk(&self) -> bool {
        match self.try_migrate().await {
            Ok(_) => true,
            Err(e) => {
                warn!("Legacy migration not completed ({}): {}", e.code(), e);
                false
            }
        }
    }

    /// Copy the legacy record into the signed-in managed identity, then
    /// delete it locally.
    ///
    /// Steps run in order and are not rolled back. The legacy record is only
    /// removed after every provider write succeeded, so a failed attempt can
    /// simply be retried; the name write is idempotent and a metadata
    /// document that already records the migration skips both writes.
    pub async fn try_migrate(&self) -> Result<MigrationReport, MigrationError> {
        let record = {
            let legacy = self.legacy.read().unwrap_or_else(PoisonError::into_inner);
            match (&legacy.record, legacy.status) {
                (Some(record), _) => record.clone(),
                (None, LegacyLoadStatus::Malformed) => {
                    return Err(MigrationError::MalformedLegacyData);
                }
                (None, _) => return Err(MigrationError::NoLegacyData),
            }
        };

        let session = self.provider.session();
        let user = self
            .provider
            .user()
            .filter(|_| session.has_active_user())
            .ok_or(MigrationError::NotSignedIn)?;

        if self.migration_in_flight.swap(true, Ordering::SeqCst) {
            return Err(MigrationError::InProgress);
        }
        let _in_flight = InFlightGuard(&self.migration_in_flight);

        let plan = MigrationPlan::stage(&record, &user.public_metadata, Utc::now());
        let mut report = MigrationReport {
            user_id: user.id.clone(),
            role: record.role,
            name_updated: false,
            metadata_updated: false,
            resumed: plan.already_applied,
        };

        if plan.already_applied {
            info!(
                "Metadata for {} already records the migration, clearing local data",
                user.id
            );
        } else {
            if let Some(name) = &plan.name {
                self.provider
                    .update_name(&name.first_name, &name.last_name)
                    .await
                    .map_err(|source| {
                        error!("Name update failed for {}: {}", user.id, source);
                        MigrationError::UpdateRejected {
                            step: MigrationStep::UpdateName,
                            source,
                        }
                    })?;
                report.name_updated = true;
            }

            self.provider
                .update_public_metadata(&plan.metadata)
                .await
                .map_err(|source| {
                    error!("Metadata update failed for {}: {}", user.id, source);
                    MigrationError::UpdateRejected {
                        step: MigrationStep::UpdateMetadata,
                        source,
                    }
                })?;
            report.metadata_updated = true;
        }

        self.clear_legacy_data();
        info!(
            "Migrated legacy user {} into {} as {}",
            record.id, user.id, record.role
        );

        Ok(report)
    }

    /// Drop the legacy record from storage and memory. Idempotent.
    pub fn clear_legacy_data(&self) {
        if let Err(e) = self.store.remove_item(&self.config.legacy_user_key) {
            warn!("Failed to remove legacy user from storage: {}", e);
        }

        let mut state = self.legacy.write().unwrap_or_else(PoisonError::into_inner);
        state.record = None;
        state.status = LegacyLoadStatus::Absent;
    }

    /// Persist a legacy login and navigate to the role's landing path
    pub fn legacy_login<F>(&self, record: LegacyUserRecord, navigate: F) -> AuthErrorResult<()>
    where
        F: FnOnce(&str),
    {
        let raw = record.to_json()?;
        self.store.set_item(&self.config.legacy_user_key, &raw)?;

        let landing = self.config.routes.landing_path(record.role).to_string();
        info!("Legacy login for {} as {}", record.id, record.role);

        {
            let mut state = self.legacy.write().unwrap_or_else(PoisonError::into_inner);
            state.record = Some(record);
            state.status = LegacyLoadStatus::Loaded;
        }

        navigate(&landing);
        Ok(())
    }

    pub fn legacy_logout<F>(&self, navigate: F)
    where
        F: FnOnce(&str),
    {
        self.clear_legacy_data();
        info!("Legacy logout");
        navigate(&self.config.routes.root);
    }

    /// Sign out of every mechanism. The legacy record is cleared even when
    /// the provider call fails; navigation only happens on full success.
    pub async fn sign_out<F>(&self, navigate: F) -> bool
    where
        F: FnOnce(&str),
    {
        let mut signed_out = true;

        if self.provider.session().is_signed_in
            && let Err(e) = self.provider.sign_out().await
        {
            error!("Identity provider sign-out failed: {}", e);
            signed_out = false;
        }

        self.clear_legacy_data();

        if signed_out {
            navigate(&self.config.routes.root);
        }
        signed_out
    }

    pub fn debug(&self) -> DebugSnapshot {
        let session = self.provider.session();
        let legacy = self.legacy.read().unwrap_or_else(PoisonError::into_inner);
        let has_legacy_user = legacy.record.is_some();
        let legacy_load_status = legacy.status;
        drop(legacy);

        DebugSnapshot {
            clerk_loaded: session.is_loaded,
            clerk_signed_in: session.is_signed_in,
            clerk_user_id: session.user_id,
            has_clerk_user: self.provider.user().is_some(),
            has_legacy_user,
            legacy_load_status,
            legacy_user_key: self.config.legacy_user_key.clone(),
            auth_method: self.auth_state().auth_method,
            migration_in_flight: self.migration_in_flight.load(Ordering::SeqCst),
        }
    }
}
