pub mod auth_method;
pub mod auth_state;
pub mod debug_snapshot;
pub mod error;
pub mod identity_provider;
pub mod identity_reconciler;
pub mod identity_source;
pub mod json_file_store;
pub mod key_value_store;
pub mod legacy_load_status;
pub mod memory_store;
pub mod migration_error;
pub mod migration_plan;
pub mod reconciler_config;
pub mod role_requirement;
pub mod role_routes;
pub mod session_snapshot;
pub mod signed_out_identity;

pub use auth_method::AuthMethod;
pub use auth_state::AuthState;
pub use debug_snapshot::DebugSnapshot;
pub use error::{AuthError, Result};
pub use identity_provider::IdentityProvider;
pub use identity_reconciler::IdentityReconciler;
pub use identity_source::{
    IdentitySource, IdentitySourceChain, LegacyRecordSource, ManagedIdentitySource,
    ReconcileInputs, ResolvedIdentity,
};
pub use json_file_store::JsonFileStore;
pub use key_value_store::KeyValueStore;
pub use legacy_load_status::LegacyLoadStatus;
pub use memory_store::MemoryStore;
pub use migration_error::{MigrationError, MigrationReport, MigrationStep};
pub use migration_plan::MigrationPlan;
pub use reconciler_config::ReconcilerConfig;
pub use role_requirement::RoleRequirement;
pub use role_routes::RoleRoutes;
pub use session_snapshot::SessionSnapshot;
pub use signed_out_identity::SignedOutIdentity;

#[cfg(test)]
mod tests;
