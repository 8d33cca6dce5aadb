//! Profile document served by the Mundoctor backend.

use md_core::{Role, UnifiedUser, UserSource};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub verified: bool,
}

/// `{ "success": true, "data": { ... } }` wrapper some endpoints use
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ProfileEnvelope {
    Wrapped {
        success: bool,
        data: Option<BackendProfile>,
        message: Option<String>,
    },
    Bare(BackendProfile),
}

impl From<BackendProfile> for UnifiedUser {
    fn from(profile: BackendProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            email: profile.email,
            phone: profile.phone,
            avatar_url: profile.avatar_url,
            role: profile.role,
            verified: profile.verified,
            source: UserSource::Clerk,
        }
    }
}
