use crate::{AuthMethod, ResolvedIdentity};

use md_core::UnifiedUser;

use serde::Serialize;

/// Derived authentication state, recomputed on every read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub loading: bool,
    pub is_authenticated: bool,
    pub user: Option<UnifiedUser>,
    pub auth_method: AuthMethod,
}

impl AuthState {
    /// Undecided state reported until every source has loaded
    pub fn loading() -> Self {
        Self {
            loading: true,
            is_authenticated: false,
            user: None,
            auth_method: AuthMethod::None,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            loading: false,
            ..Self::loading()
        }
    }

    pub fn resolved(identity: ResolvedIdentity) -> Self {
        Self {
            loading: false,
            is_authenticated: true,
            user: Some(identity.user),
            auth_method: identity.method,
        }
    }
}
