use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{AccountDeletedRequest, MessageResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;
use cc_core::{EmailServiceTrait, IdentityProviderTrait, OtpStore};

/// Handler for POST /api/v1/notifications/account-deleted
///
/// Called by the app after it deleted the user's account.
///
/// # Request Body
///
/// ```json
/// { "email": "ada@example.com", "userName": "Ada" }
/// ```
pub async fn account_deleted<S, E, I>(
    state: web::Data<AppState<S, E, I>>,
    request: web::Json<AccountDeletedRequest>,
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
        .notify_account_deleted(&request.email, request.user_name.as_deref())
        .await
    {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::ok(
            "Deletion notification email sent successfully",
        )),
        Err(error) => handle_domain_error(&error),
    }
}
