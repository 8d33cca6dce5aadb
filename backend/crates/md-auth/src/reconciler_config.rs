use crate::RoleRoutes;

const DEFAULT_LEGACY_USER_KEY: &str = "mundoctor_user";

/// Configuration for [`crate::IdentityReconciler`]
#[derive(Debug, Clone)]
pub struct ReconcilerConfig {
    /// Storage key holding the serialized legacy user
    pub legacy_user_key: String,
    pub routes: RoleRoutes,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            legacy_user_key: String::from(DEFAULT_LEGACY_USER_KEY),
            routes: RoleRoutes::default(),
        }
    }
}
