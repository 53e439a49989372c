//! Route handlers and their registration

pub mod health;
pub mod notifications;
pub mod outreach;
pub mod password;
pub mod password_reset;

use actix_web::web;

use crate::handlers::json_config;
use cc_core::{EmailServiceTrait, IdentityProviderTrait, OtpStore};

pub use password_reset::AppState;

/// Register every `/api/v1` route
///
/// `attachment_limit` caps the body size of routes that carry file uploads.
pub fn configure<S, E, I>(cfg: &mut web::ServiceConfig, attachment_limit: usize)
where
    S: OtpStore + 'static,
    E: EmailServiceTrait + ?Sized + 'static,
    I: IdentityProviderTrait + ?Sized + 'static,
{
    cfg.service(
        web::scope("/password-reset")
            .route("/send-otp", web::post().to(password_reset::send_otp::send_otp::<S, E, I>))
            .route(
                "/resend-otp",
                web::post().to(password_reset::resend_otp::resend_otp::<S, E, I>),
            )
            .route(
                "/verify-otp",
                web::post().to(password_reset::verify_otp::verify_otp::<S, E, I>),
            )
            .route(
                "/verify-otp-and-reset",
                web::post().to(password_reset::reset_password::verify_otp_and_reset::<S, E, I>),
            ),
    )
    .service(web::scope("/notifications").route(
        "/account-deleted",
        web::post().to(notifications::account_deleted::account_deleted::<S, E, I>),
    ))
    .service(
        web::resource("/send-resume-email")
            .app_data(json_config(attachment_limit))
            .route(web::post().to(outreach::send_resume_email::send_resume_email::<S, E, I>)),
    )
    .route(
        "/send-candidate-email",
        web::post().to(outreach::send_candidate_email::send_candidate_email::<S, E, I>),
    )
    .route("/password/strength", web::post().to(password::strength::password_strength))
    .route("/health", web::get().to(health::health_check));
}
