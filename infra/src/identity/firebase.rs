//! Firebase Identity Toolkit client
//!
//! Looks up accounts by email and replaces passwords through the admin REST
//! endpoints, authenticated with an OAuth bearer token.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use cc_core::IdentityProviderTrait;
use cc_shared::config::IdentityConfig;
use cc_shared::utils::mask_email;

use crate::InfrastructureError;

/// Identity provider backed by Firebase Authentication
pub struct FirebaseIdentityProvider {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
    access_token: String,
}

/// `accounts:lookup` request
#[derive(Debug, Serialize)]
struct LookupRequest<'a> {
    email: [&'a str; 1],
}

/// `accounts:lookup` response; `users` is absent when nothing matched
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LookupResponse {
    #[serde(default)]
    pub(crate) users: Vec<UserInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserInfo {
    pub(crate) local_id: String,
}

/// `accounts:update` request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateRequest<'a> {
    local_id: &'a str,
    password: &'a str,
}

/// Google API error envelope
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub(crate) error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) message: String,
}

impl FirebaseIdentityProvider {
    /// Create a new client from configuration
    pub fn new(config: &IdentityConfig) -> Result<Self, InfrastructureError> {
        let project_id = config
            .project_id
            .clone()
            .ok_or_else(|| InfrastructureError::Config("FIREBASE_PROJECT_ID not set".to_string()))?;
        let access_token = config.access_token.clone().ok_or_else(|| {
            InfrastructureError::Config("FIREBASE_ACCESS_TOKEN not set".to_string())
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(project_id = %project_id, "Firebase identity provider initialized");

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            project_id,
            access_token,
        })
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/projects/{}/accounts:{}", self.base_url, self.project_id, action)
    }

    /// Resolve the Firebase uid registered under an email
    pub async fn lookup_uid(&self, email: &str) -> Result<Option<String>, InfrastructureError> {
        let response = self
            .client
            .post(self.endpoint("lookup"))
            .bearer_auth(&self.access_token)
            .json(&LookupRequest { email: [email] })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        let uid = parse_lookup(&body)?;
        debug!(email = %mask_email(email), found = uid.is_some(), "Firebase account lookup");
        Ok(uid)
    }

    /// Set a new password for a uid
    pub async fn set_password(&self, uid: &str, password: &str) -> Result<(), InfrastructureError> {
        let response = self
            .client
            .post(self.endpoint("update"))
            .bearer_auth(&self.access_token)
            .json(&UpdateRequest {
                local_id: uid,
                password,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), &body));
        }

        Ok(())
    }
}

/// Extract the first uid from a lookup response body
pub(crate) fn parse_lookup(body: &str) -> Result<Option<String>, InfrastructureError> {
    let parsed: LookupResponse = if body.trim().is_empty() {
        LookupResponse::default()
    } else {
        serde_json::from_str(body).map_err(|e| {
            InfrastructureError::General(format!("Malformed lookup response: {}", e))
        })?
    };

    Ok(parsed.users.into_iter().next().map(|user| user.local_id))
}

/// Turn a non-success response into an error, preferring the API message
pub(crate) fn api_error(status: u16, body: &str) -> InfrastructureError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .ok()
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| body.trim().to_string());

    InfrastructureError::Identity { status, message }
}

#[async_trait]
impl IdentityProviderTrait for FirebaseIdentityProvider {
    async fn account_exists(&self, email: &str) -> Result<bool, String> {
        self.lookup_uid(email)
            .await
            .map(|uid| uid.is_some())
            .map_err(|e| e.to_string())
    }

    async fn update_password(&self, email: &str, new_password: &str) -> Result<(), String> {
        let uid = self
            .lookup_uid(email)
            .await
            .map_err(|e| e.to_string())?
            .ok_or_else(|| InfrastructureError::UserNotFound(mask_email(email)).to_string())?;

        self.set_password(&uid, new_password)
            .await
            .map_err(|e| e.to_string())?;

        info!(email = %mask_email(email), "Firebase password updated");
        Ok(())
    }
}
