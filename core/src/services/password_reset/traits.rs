//! Traits for email delivery and identity provider integration

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::types::CodeDispatch;
use crate::services::outreach::{CandidateMessage, ResumeShare};

/// Trait for outbound email integration
///
/// Each method returns the provider's message id on success.
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send a password reset code
    async fn send_reset_code(
        &self,
        email: &str,
        code: &str,
        dispatch: CodeDispatch,
    ) -> Result<String, String>;

    /// Confirm that the password of an account was changed
    async fn send_password_changed(
        &self,
        email: &str,
        changed_at: DateTime<Utc>,
    ) -> Result<String, String>;

    /// Notify a user that their account was deleted
    async fn send_account_deleted(
        &self,
        email: &str,
        user_name: &str,
        deleted_at: DateTime<Utc>,
    ) -> Result<String, String>;

    /// Deliver a shared resume with its PDF attached
    async fn send_resume(&self, share: &ResumeShare) -> Result<String, String>;

    /// Deliver an employer's message to a candidate
    async fn send_candidate_message(&self, message: &CandidateMessage) -> Result<String, String>;
}

/// Trait for the account system holding user credentials
#[async_trait]
pub trait IdentityProviderTrait: Send + Sync {
    /// Check whether an account is registered under the email
    async fn account_exists(&self, email: &str) -> Result<bool, String>;

    /// Replace the password of the account registered under the email
    async fn update_password(&self, email: &str, new_password: &str) -> Result<(), String>;
}
