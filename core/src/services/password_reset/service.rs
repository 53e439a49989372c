//! Main password reset service implementation

use std::sync::Arc;

use crate::errors::{DomainError, DomainResult};
use crate::repositories::OtpStore;
use cc_shared::utils::{is_valid_email, mask_email};

use super::config::PasswordResetConfig;
use super::registry::OtpRegistry;
use super::traits::{EmailServiceTrait, IdentityProviderTrait};
use super::types::{CodeDispatch, ResetOutcome, SendCodeResult};

/// Name used in notifications when the caller does not supply one
pub const DEFAULT_USER_NAME: &str = "User";

/// Password reset service for handling email one-time codes
pub struct PasswordResetService<S, E, I>
where
    S: OtpStore,
    E: EmailServiceTrait + ?Sized,
    I: IdentityProviderTrait + ?Sized,
{
    /// Registry holding outstanding codes
    registry: Arc<OtpRegistry<S>>,
    /// Email service for delivering codes and notices
    email_service: Arc<E>,
    /// Account system that owns the passwords
    identity_provider: Arc<I>,
    /// Service configuration
    config: PasswordResetConfig,
}

impl<S, E, I> PasswordResetService<S, E, I>
where
    S: OtpStore,
    E: EmailServiceTrait + ?Sized,
    I: IdentityProviderTrait + ?Sized,
{
    /// Create a new password reset service
    ///
    /// # Arguments
    ///
    /// * `registry` - OTP registry shared with the sweeper
    /// * `email_service` - Email delivery implementation
    /// * `identity_provider` - Account system implementation
    /// * `config` - Service configuration
    pub fn new(
        registry: Arc<OtpRegistry<S>>,
        email_service: Arc<E>,
        identity_provider: Arc<I>,
        config: PasswordResetConfig,
    ) -> Self {
        Self {
            registry,
            email_service,
            identity_provider,
            config,
        }
    }

    pub fn registry(&self) -> &Arc<OtpRegistry<S>> {
        &self.registry
    }

    pub fn config(&self) -> &PasswordResetConfig {
        &self.config
    }

    /// Send a reset code to the email of an existing account
    ///
    /// This method:
    /// 1. Validates the email format
    /// 2. Checks that an account exists for the email
    /// 3. Issues a fresh code, invalidating any previous one
    /// 4. Delivers the code by email
    ///
    /// # Returns
    ///
    /// * `Ok(SendCodeResult)` - Expiry and provider message id
    /// * `Err(DomainError)` - Validation, unknown account, provider or delivery failure
    pub async fn request_code(&self, email: &str) -> DomainResult<SendCodeResult> {
        self.dispatch_code(email, CodeDispatch::Initial).await
    }

    /// Same as [`request_code`](Self::request_code) but sends the resend email
    pub async fn resend_code(&self, email: &str) -> DomainResult<SendCodeResult> {
        self.dispatch_code(email, CodeDispatch::Resend).await
    }

    async fn dispatch_code(
        &self,
        email: &str,
        dispatch: CodeDispatch,
    ) -> DomainResult<SendCodeResult> {
        Self::validate_email(email)?;
        self.ensure_account_exists(email).await?;

        let record = self.registry.issue(email).await?;

        let message_id = match self
            .email_service
            .send_reset_code(email, &record.code, dispatch)
            .await
        {
            Ok(message_id) => message_id,
            Err(e) => {
                tracing::error!(
                    email = %mask_email(email),
                    error = %e,
                    dispatch = dispatch.as_str(),
                    event = "otp_delivery_failed",
                    "Failed to deliver reset code"
                );

                if self.config.revoke_on_delivery_failure {
                    if let Err(revoke_err) = self.registry.revoke(&record).await {
                        tracing::error!(
                            email = %mask_email(email),
                            error = %revoke_err,
                            "Failed to revoke undelivered reset code"
                        );
                    }
                }

                return Err(DomainError::Delivery {
                    message: format!("Failed to send OTP email: {}", e),
                });
            }
        };

        tracing::info!(
            email = %mask_email(email),
            message_id = %message_id,
            dispatch = dispatch.as_str(),
            event = "otp_sent",
            "Reset code delivered"
        );

        Ok(SendCodeResult {
            expires_at: record.expires_at,
            expires_in: record.expires_at - record.issued_at,
            message_id,
            dispatch,
        })
    }

    /// Check a code without consuming it
    pub async fn verify_code(&self, email: &str, code: &str) -> DomainResult<()> {
        Self::require("Email and OTP are required", &[email, code])?;
        self.registry.verify(email, code).await.map(|_| ())
    }

    /// Consume a code and set a new password
    ///
    /// The code is spent before the identity provider is called, so a
    /// provider failure still requires a new code. The confirmation email is
    /// best effort.
    pub async fn verify_and_reset(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> DomainResult<ResetOutcome> {
        Self::require("All fields are required", &[email, code, new_password])?;

        self.registry.consume(email, code, new_password).await?;

        self.identity_provider
            .update_password(email, new_password)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(email),
                    error = %e,
                    event = "password_update_failed",
                    "Identity provider rejected password update"
                );
                DomainError::Provider {
                    message: format!("Failed to update password: {}", e),
                }
            })?;

        let changed_at = self.registry.clock().now();
        tracing::info!(
            email = %mask_email(email),
            event = "password_reset",
            "Password reset completed"
        );

        let confirmation_sent = match self
            .email_service
            .send_password_changed(email, changed_at)
            .await
        {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(
                    email = %mask_email(email),
                    error = %e,
                    event = "confirmation_delivery_failed",
                    "Password changed but confirmation email failed"
                );
                false
            }
        };

        Ok(ResetOutcome {
            changed_at,
            confirmation_sent,
        })
    }

    /// Send the account deletion notice
    ///
    /// The account is already gone, so no existence check is made.
    pub async fn notify_account_deleted(
        &self,
        email: &str,
        user_name: Option<&str>,
    ) -> DomainResult<String> {
        Self::require("Email is required", &[email])?;

        let user_name = user_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_USER_NAME);
        let deleted_at = self.registry.clock().now();

        let message_id = self
            .email_service
            .send_account_deleted(email, user_name, deleted_at)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(email),
                    error = %e,
                    event = "deletion_notice_failed",
                    "Failed to send account deletion notice"
                );
                DomainError::Delivery {
                    message: format!("Failed to send deletion notification: {}", e),
                }
            })?;

        tracing::info!(
            email = %mask_email(email),
            message_id = %message_id,
            event = "deletion_notice_sent",
            "Account deletion notice delivered"
        );

        Ok(message_id)
    }

    async fn ensure_account_exists(&self, email: &str) -> DomainResult<()> {
        let exists = self
            .identity_provider
            .account_exists(email)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(email),
                    error = %e,
                    event = "account_lookup_failed",
                    "Identity provider lookup failed"
                );
                DomainError::Provider {
                    message: format!("Failed to look up account: {}", e),
                }
            })?;

        if !exists {
            tracing::info!(
                email = %mask_email(email),
                event = "account_not_found",
                "Reset requested for unknown account"
            );
            return Err(DomainError::AccountNotFound);
        }

        Ok(())
    }

    fn validate_email(email: &str) -> DomainResult<()> {
        Self::require("Email is required", &[email])?;
        if !is_valid_email(email) {
            return Err(DomainError::Validation {
                message: "Invalid email format".to_string(),
            });
        }
        Ok(())
    }

    fn require(message: &str, fields: &[&str]) -> DomainResult<()> {
        if fields.iter().any(|field| field.is_empty()) {
            return Err(DomainError::Validation {
                message: message.to_string(),
            });
        }
        Ok(())
    }
}
