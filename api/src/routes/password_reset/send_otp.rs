use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{SendOtpRequest, SendOtpResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use cc_core::{EmailServiceTrait, IdentityProviderTrait, OtpStore};
use cc_shared::utils::mask_email;

use super::AppState;

/// Handler for POST /api/v1/password-reset/send-otp
///
/// Emails a fresh 6-digit code to an existing account. Any code issued
/// earlier for the same email stops working.
///
/// # Request Body
///
/// ```json
/// { "email": "ada@example.com" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "message": "OTP sent successfully to your email",
///     "expiresInSeconds": 600
/// }
/// ```
///
/// ## Errors
/// - 400: missing or malformed email
/// - 404: no account for the email
/// - 502: identity provider unavailable
/// - 503: email could not be sent
pub async fn send_otp<S, E, I>(
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

    tracing::info!(email = %mask_email(&request.email), "Processing send-otp request");

    match state.reset_service.request_code(&request.email).await {
        Ok(result) => HttpResponse::Ok().json(SendOtpResponse {
            success: true,
            message: "OTP sent successfully to your email".to_string(),
            expires_in_seconds: result.expires_in.num_seconds(),
        }),
        Err(error) => handle_domain_error(&error),
    }
}
