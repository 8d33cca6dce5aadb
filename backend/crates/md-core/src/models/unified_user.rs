use crate::{LegacyUserRecord, Role, UserSource};

use serde::{Deserialize, Serialize};

/// The reconciled current user, whichever backing source produced it.
/// Derived on every read and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Role,
    pub verified: bool,
    pub source: UserSource,
}

impl From<&LegacyUserRecord> for UnifiedUser {
    fn from(record: &LegacyUserRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            phone: None,
            avatar_url: None,
            role: record.role,
            verified: false,
            source: UserSource::LocalStorage,
        }
    }
}

impl UnifiedUser {
    /// Whether the user holds any of the given roles
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }
}
