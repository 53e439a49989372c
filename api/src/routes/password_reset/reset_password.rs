use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{MessageResponse, ResetPasswordRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use cc_core::{EmailServiceTrait, IdentityProviderTrait, OtpStore};
use cc_shared::utils::mask_email;

use super::AppState;

/// Handler for POST /api/v1/password-reset/verify-otp-and-reset
///
/// # Request Body
///
/// ```json
/// { "email": "ada@example.com", "otp": "123456", "newPassword": "Password1!" }
/// ```
///
/// # Response
///
/// ## Errors
/// - 400 `WEAK_PASSWORD` with a `requirements` list; the code stays valid
/// - 400 OTP errors
/// - 502 when the identity provider rejects the update; the code is spent
pub async fn verify_otp_and_reset<S, E, I>(
    state: web::Data<AppState<S, E, I>>,
    request: web::Json<ResetPasswordRequest>,
) -> HttpResponse
where
    S: OtpStore + 'static,
    E: EmailServiceTrait + ?Sized + 'static,
    I: IdentityProviderTrait + ?Sized + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .reset_service
        .verify_and_reset(&request.email, &request.otp, &request.new_password)
        .await
    {
        Ok(outcome) => {
            tracing::info!(
                email = %mask_email(&request.email),
                confirmation_sent = outcome.confirmation_sent,
                "Password reset via API"
            );
            HttpResponse::Ok().json(MessageResponse::ok("Password reset successfully"))
        }
        Err(error) => handle_domain_error(&error),
    }
}
