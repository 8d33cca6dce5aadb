//! Ordered identity resolution.
//!
//! Each source either produces a unified user or has no opinion. The chain
//! asks sources in order and the first answer wins, so the managed identity
//! outranks the legacy record purely by its position.

use crate::{AuthMethod, SessionSnapshot};

use md_core::{LegacyUserRecord, ManagedIdentity, UnifiedUser};

/// Everything a source may look at for one resolution pass
#[derive(Debug, Clone, Copy)]
pub struct ReconcileInputs<'a> {
    pub session: &'a SessionSnapshot,
    pub managed_user: Option<&'a ManagedIdentity>,
    pub legacy: Option<&'a LegacyUserRecord>,
}

/// Winning source's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub method: AuthMethod,
    pub user: UnifiedUser,
    pub source_name: &'static str,
}

pub trait IdentitySource: Send + Sync {
    fn name(&self) -> &'static str;

    fn method(&self) -> AuthMethod;

    /// `None` means "no opinion"
    fn resolve(&self, inputs: &ReconcileInputs<'_>) -> Option<UnifiedUser>;
}

/// Signed-in managed identity with a user object and a non-empty id
#[derive(Debug, Default, Clone, Copy)]
pub struct ManagedIdentitySource;

impl IdentitySource for ManagedIdentitySource {
    fn name(&self) -> &'static str {
        "managed_identity"
    }

    fn method(&self) -> AuthMethod {
        AuthMethod::Clerk
    }

    fn resolve(&self, inputs: &ReconcileInputs<'_>) -> Option<UnifiedUser> {
        if !inputs.session.has_active_user() {
            return None;
        }
        inputs
            .managed_user
            .filter(|user| !user.id.is_empty())
            .map(ManagedIdentity::to_unified_user)
    }
}

/// Record left in local storage by the legacy login flow
#[derive(Debug, Default, Clone, Copy)]
pub struct LegacyRecordSource;

impl IdentitySource for LegacyRecordSource {
    fn name(&self) -> &'static str {
        "legacy_record"
    }

    fn method(&self) -> AuthMethod {
        AuthMethod::Legacy
    }

    fn resolve(&self, inputs: &ReconcileInputs<'_>) -> Option<UnifiedUser> {
        inputs.legacy.map(UnifiedUser::from)
    }
}

pub struct IdentitySourceChain {
    sources: Vec<Box<dyn IdentitySource>>,
}

impl IdentitySourceChain {
    pub fn new(sources: Vec<Box<dyn IdentitySource>>) -> Self {
        Self { sources }
    }

    pub fn resolve(&self, inputs: &ReconcileInputs<'_>) -> Option<ResolvedIdentity> {
        self.sources.iter().find_map(|source| {
            source.resolve(inputs).map(|user| ResolvedIdentity {
                method: source.method(),
                user,
                source_name: source.name(),
            })
        })
    }

    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|source| source.name()).collect()
    }
}

impl Default for IdentitySourceChain {
    /// Managed identity first, then the legacy record
    fn default() -> Self {
        Self::new(vec![
            Box::new(ManagedIdentitySource),
            Box::new(LegacyRecordSource),
        ])
    }
}

impl std::fmt::Debug for IdentitySourceChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentitySourceChain")
            .field("sources", &self.source_names())
            .finish()
    }
}
