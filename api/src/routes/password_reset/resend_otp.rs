use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{SendOtpRequest, SendOtpResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use cc_core::{EmailServiceTrait, IdentityProviderTrait, OtpStore};
use cc_shared::utils::mask_email;

use super::AppState;

/// Handler for POST /api/v1/password-reset/resend-otp
///
/// Same contract as send-otp; the email wording tells the user this is a
/// replacement code.
pub async fn resend_otp<S, E, I>(
    state: web::Data<AppState<S, E, I>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    S: OtpStore + 'static,
    E: EmailServiceTrait + ?Sized + 'static,
    I: IdentityProviderTrait + ?Sized + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    tracing::info!(email = %mask_email(&request.email), "Processing resend-otp request");

    match state.reset_service.resend_code(&request.email).await {
        Ok(result) => HttpResponse::Ok().json(SendOtpResponse {
            success: true,
            message: "OTP resent successfully to your email".to_string(),
            expires_in_seconds: result.expires_in.num_seconds(),
        }),
        Err(error) => handle_domain_error(&error),
    }
}
