use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{EmailSentResponse, SendCandidateEmailRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;
use cc_core::{EmailServiceTrait, IdentityProviderTrait, OtpStore};

/// Handler for POST /api/v1/send-candidate-email
///
/// # Request Body
///
/// ```json
/// {
///     "to": "grace@example.com",
///     "subject": "Interview invitation",
///     "body": "We would like to meet you.",
///     "company": "Analytical Engines Ltd",
///     "jobTitle": "Backend Engineer",
///     "candidateName": "Grace"
/// }
/// ```
pub async fn send_candidate_email<S, E, I>(
    state: web::Data<AppState<S, E, I>>,
    request: web::Json<SendCandidateEmailRequest>,
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
        .outreach_service
        .contact_candidate(request.into_inner().into())
        .await
    {
        Ok(message_id) => HttpResponse::Ok().json(EmailSentResponse {
            success: true,
            message: "Email sent successfully".to_string(),
            message_id,
        }),
        Err(error) => handle_domain_error(&error),
    }
}
