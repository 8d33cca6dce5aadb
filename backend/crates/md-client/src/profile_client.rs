use crate::backend_profile::ProfileEnvelope;
use crate::{BackendProfile, ClientError, ClientResult};

use md_core::{ManagedIdentity, UnifiedUser};

use log::{debug, warn};
use reqwest::Client as ReqwestClient;

/// Client for the Mundoctor backend profile API
pub struct ProfileClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl ProfileClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API base URL (e.g., "http://127.0.0.1:3001/api")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Fetch the backend profile of a user
    pub async fn fetch_profile(&self, user_id: &str) -> ClientResult<BackendProfile> {
        let url = format!("{}/users/{}/profile", self.base_url, user_id);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(ClientError::api_error(
                status.as_u16(),
                "PROFILE_UNAVAILABLE".to_string(),
                format!("HTTP {}", status),
            ));
        }

        match serde_json::from_slice::<ProfileEnvelope>(&bytes)? {
            ProfileEnvelope::Bare(profile) => Ok(profile),
            ProfileEnvelope::Wrapped {
                success: true,
                data: Some(profile),
                ..
            } => Ok(profile),
            ProfileEnvelope::Wrapped { message, .. } => Err(ClientError::api_error(
                status.as_u16(),
                "PROFILE_REJECTED".to_string(),
                message.unwrap_or_else(|| "Profile request unsuccessful".to_string()),
            )),
        }
    }

    /// Backend profile of the identity, or a profile built from the
    /// identity's own fields when the backend cannot provide one
    pub async fn profile_or_fallback(&self, identity: &ManagedIdentity) -> UnifiedUser {
        match self.fetch_profile(&identity.id).await {
            Ok(profile) => {
                debug!("Loaded backend profile for {}", identity.id);
                profile.into()
            }
            Err(e) => {
                warn!(
                    "Backend profile for {} unavailable, using identity fields: {}",
                    identity.id, e
                );
                identity.to_unified_user()
            }
        }
    }
}
