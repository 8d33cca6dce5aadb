use crate::{ClerkUserDto, ClientError, ClientResult};

use md_core::{ManagedIdentity, PublicMetadata};

use reqwest::{Client as ReqwestClient, Method};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Client for the Clerk Backend API
pub struct ClerkClient {
    pub base_url: String,
    secret_key: String,
    client: ReqwestClient,
}

#[derive(Deserialize)]
struct ClerkErrorBody {
    #[serde(default)]
    errors: Vec<ClerkErrorDetail>,
}

#[derive(Deserialize)]
struct ClerkErrorDetail {
    code: Option<String>,
    message: Option<String>,
    long_message: Option<String>,
}

impl ClerkClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API URL (e.g., "https://api.clerk.com")
    /// * `secret_key` - Backend secret key, sent as a bearer token
    pub fn new(base_url: &str, secret_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            secret_key: secret_key.to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/v1{}", self.base_url, path);
        self.client
            .request(method, &url)
            .bearer_auth(&self.secret_key)
    }

    /// Execute request, mapping Clerk error bodies to `ClientError::Api`
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<ClerkErrorBody>(&bytes)
                .ok()
                .and_then(|body| body.errors.into_iter().next());
            let (code, message) = match detail {
                Some(detail) => (
                    detail.code.unwrap_or_else(|| "UNKNOWN".to_string()),
                    detail
                        .long_message
                        .or(detail.message)
                        .unwrap_or_else(|| "Unknown error".to_string()),
                ),
                None => ("UNKNOWN".to_string(), format!("HTTP {}", status)),
            };
            return Err(ClientError::api_error(status.as_u16(), code, message));
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn execute_user(&self, req: reqwest::RequestBuilder) -> ClientResult<ManagedIdentity> {
        let value = self.execute(req).await?;
        let dto: ClerkUserDto = serde_json::from_value(value)?;
        Ok(dto.into())
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Get a user by ID
    pub async fn get_user(&self, user_id: &str) -> ClientResult<ManagedIdentity> {
        let req = self.request(Method::GET, &format!("/users/{}", user_id));
        self.execute_user(req).await
    }

    /// Set first and last name
    pub async fn update_user_name(
        &self,
        user_id: &str,
        first_name: &str,
        last_name: &str,
    ) -> ClientResult<ManagedIdentity> {
        #[derive(Serialize)]
        struct UpdateRequest<'a> {
            first_name: &'a str,
            last_name: &'a str,
        }

        let body = UpdateRequest {
            first_name,
            last_name,
        };
        let req = self
            .request(Method::PATCH, &format!("/users/{}", user_id))
            .json(&body);
        self.execute_user(req).await
    }

    /// Write public metadata. Clerk merges the document server-side.
    pub async fn update_public_metadata(
        &self,
        user_id: &str,
        metadata: &PublicMetadata,
    ) -> ClientResult<ManagedIdentity> {
        #[derive(Serialize)]
        struct MetadataRequest<'a> {
            public_metadata: &'a PublicMetadata,
        }

        let body = MetadataRequest {
            public_metadata: metadata,
        };
        let req = self
            .request(Method::PATCH, &format!("/users/{}/metadata", user_id))
            .json(&body);
        self.execute_user(req).await
    }

    // =========================================================================
    // Sessions
    // =========================================================================

    /// Revoke a session, signing the user out of it
    pub async fn revoke_session(&self, session_id: &str) -> ClientResult<Value> {
        let req = self.request(Method::POST, &format!("/sessions/{}/revoke", session_id));
        self.execute(req).await
    }
}
