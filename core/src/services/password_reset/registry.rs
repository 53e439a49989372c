//! OTP registry: issue, verify, consume and sweep of reset codes

use chrono::Duration;
use std::sync::Arc;

use crate::clock::Clock;
use crate::domain::entities::OtpRecord;
use crate::domain::value_objects::validate_password;
use crate::errors::{DomainError, DomainResult, OtpError};
use crate::repositories::OtpStore;
use cc_shared::utils::mask_email;

/// Owns the outstanding code of every identity and the rules around it
///
/// Callers must check that the identity exists before calling [`issue`].
///
/// [`issue`]: OtpRegistry::issue
pub struct OtpRegistry<S: OtpStore> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl<S: OtpStore> OtpRegistry<S> {
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self { store, clock, ttl }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a fresh code for an identity, replacing any outstanding one
    pub async fn issue(&self, identity: &str) -> DomainResult<OtpRecord> {
        let now = self.clock.now();
        let record = OtpRecord::issue(identity, now, self.ttl).ok_or_else(|| {
            tracing::error!(
                email = %mask_email(identity),
                ttl_minutes = self.ttl.num_minutes(),
                "Code expiry out of range"
            );
            DomainError::Internal {
                message: format!("code lifetime of {} minutes is out of range", self.ttl.num_minutes()),
            }
        })?;
        let replaced = self.store.put(record.clone()).await?;

        tracing::info!(
            email = %mask_email(identity),
            event = "otp_issued",
            replaced = replaced.is_some(),
            expires_at = %record.expires_at,
            "Issued password reset code"
        );

        Ok(record)
    }

    /// Check a supplied code without consuming it
    ///
    /// An expired record is deleted on the way out. A matching code leaves the
    /// record in place so it can be consumed later.
    ///
    /// # Returns
    /// * `Ok(OtpRecord)` - The record the code matched
    /// * `Err(DomainError::Otp(_))` - Not found, expired or mismatched
    pub async fn verify(&self, identity: &str, code: &str) -> DomainResult<OtpRecord> {
        let Some(record) = self.store.get(identity).await? else {
            tracing::warn!(
                email = %mask_email(identity),
                event = "otp_not_found",
                "No outstanding reset code"
            );
            return Err(OtpError::NotFoundOrExpired.into());
        };

        if record.is_expired_at(self.clock.now()) {
            // Only drop the record we looked at; a concurrent reissue stays.
            self.store.remove_exact(&record).await?;
            tracing::warn!(
                email = %mask_email(identity),
                event = "otp_expired",
                expired_at = %record.expires_at,
                "Reset code expired"
            );
            return Err(OtpError::Expired.into());
        }

        if !record.matches(code) {
            tracing::warn!(
                email = %mask_email(identity),
                event = "otp_mismatch",
                "Reset code did not match"
            );
            return Err(OtpError::Mismatch.into());
        }

        tracing::debug!(
            email = %mask_email(identity),
            event = "otp_verified",
            "Reset code verified"
        );

        Ok(record)
    }

    /// Validate the new secret and the code, then delete the record
    ///
    /// The strength check runs first so a weak secret leaves the record
    /// untouched. Only one caller can consume a given record.
    pub async fn consume(
        &self,
        identity: &str,
        code: &str,
        new_secret: &str,
    ) -> DomainResult<OtpRecord> {
        let validation = validate_password(new_secret);
        if !validation.is_valid {
            tracing::info!(
                email = %mask_email(identity),
                event = "weak_password_rejected",
                unmet = validation.unmet.len(),
                "New password rejected"
            );
            return Err(DomainError::WeakPassword {
                unmet: validation.unmet,
            });
        }

        let record = self.verify(identity, code).await?;

        if !self.store.remove_exact(&record).await? {
            tracing::warn!(
                email = %mask_email(identity),
                event = "otp_consume_lost_race",
                "Reset code was consumed or replaced concurrently"
            );
            return Err(OtpError::NotFoundOrExpired.into());
        }

        tracing::info!(
            email = %mask_email(identity),
            event = "otp_consumed",
            "Reset code consumed"
        );

        Ok(record)
    }

    /// Drop a specific issued record if it is still the outstanding one
    pub async fn revoke(&self, record: &OtpRecord) -> DomainResult<bool> {
        let removed = self.store.remove_exact(record).await?;
        if removed {
            tracing::info!(
                email = %mask_email(&record.identity),
                event = "otp_revoked",
                "Reset code revoked"
            );
        }
        Ok(removed)
    }

    /// Delete every expired record
    pub async fn sweep(&self) -> DomainResult<usize> {
        let removed = self.store.sweep(self.clock.now()).await?;
        if removed > 0 {
            tracing::info!(removed = removed, event = "otp_sweep", "Swept expired reset codes");
        }
        Ok(removed)
    }

    /// Number of outstanding records
    pub async fn outstanding(&self) -> DomainResult<usize> {
        self.store.len().await
    }
}
