//! Password reset route handlers
//!
//! Two-screen flow used by the mobile app:
//! - Requesting and re-sending the emailed code
//! - Checking the code on the first screen
//! - Spending the code with a new password on the second screen

pub mod reset_password;
pub mod resend_otp;
pub mod send_otp;
pub mod verify_otp;

use std::sync::Arc;

use cc_core::{
    EmailServiceTrait, IdentityProviderTrait, OtpStore, OutreachService, PasswordResetService,
};

/// Application state that holds shared services
pub struct AppState<S, E, I>
where
    S: OtpStore,
    E: EmailServiceTrait + ?Sized,
    I: IdentityProviderTrait + ?Sized,
{
    pub reset_service: Arc<PasswordResetService<S, E, I>>,
    pub outreach_service: Arc<OutreachService<E>>,
}

impl<S, E, I> AppState<S, E, I>
where
    S: OtpStore,
    E: EmailServiceTrait + ?Sized,
    I: IdentityProviderTrait + ?Sized,
{
    pub fn new(
        reset_service: Arc<PasswordResetService<S, E, I>>,
        outreach_service: Arc<OutreachService<E>>,
    ) -> Self {
        Self {
            reset_service,
            outreach_service,
        }
    }
}
