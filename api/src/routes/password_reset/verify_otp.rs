use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{MessageResponse, VerifyOtpRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use cc_core::{EmailServiceTrait, IdentityProviderTrait, OtpStore};

use super::AppState;

/// Handler for POST /api/v1/password-reset/verify-otp
///
/// Checks a code without spending it, so the client can move on to the
/// new-password screen and submit the same code again.
///
/// # Request Body
///
/// ```json
/// { "email": "ada@example.com", "otp": "123456" }
/// ```
///
/// ## Errors
/// - 400 `OTP_NOT_FOUND`, `OTP_EXPIRED` or `OTP_MISMATCH`
pub async fn verify_otp<S, E, I>(
    state: web::Data<AppState<S, E, I>>,
    request: web::Json<VerifyOtpRequest>,
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
        .verify_code(&request.email, &request.otp)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::ok("OTP verified successfully")),
        Err(error) => handle_domain_error(&error),
    }
}
