use serde::Serialize;

/// Point-in-time view of the identity provider's session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// Provider finished initializing
    pub is_loaded: bool,
    pub is_signed_in: bool,
    pub user_id: Option<String>,
}

impl SessionSnapshot {
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self {
            is_loaded: true,
            is_signed_in: true,
            user_id: Some(user_id.into()),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            is_loaded: true,
            is_signed_in: false,
            user_id: None,
        }
    }

    pub fn loading() -> Self {
        Self::default()
    }

    /// Signed in with a usable user id
    pub fn has_active_user(&self) -> bool {
        self.is_signed_in && self.user_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}
