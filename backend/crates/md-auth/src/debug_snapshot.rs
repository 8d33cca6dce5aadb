use crate::{AuthMethod, LegacyLoadStatus};

use serde::Serialize;

/// Diagnostics exposed alongside the auth state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugSnapshot {
    pub clerk_loaded: bool,
    pub clerk_signed_in: bool,
    pub clerk_user_id: Option<String>,
    pub has_clerk_user: bool,
    pub has_legacy_user: bool,
    pub legacy_load_status: LegacyLoadStatus,
    pub legacy_user_key: String,
    pub auth_method: AuthMethod,
    pub migration_in_flight: bool,
}
