use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{EmailSentResponse, SendResumeEmailRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;
use cc_core::{EmailServiceTrait, IdentityProviderTrait, OtpStore};

/// Handler for POST /api/v1/send-resume-email
///
/// Emails a resume PDF on behalf of the signed-in user. This route accepts
/// larger bodies than the rest of the API.
///
/// # Request Body
///
/// ```json
/// {
///     "recipientEmail": "recruiter@example.com",
///     "senderName": "Ada Lovelace",
///     "message": "optional note",
///     "pdfData": "data:application/pdf;base64,JVBERi0...",
///     "filename": "ada_resume.pdf"
/// }
/// ```
///
/// ## Errors
/// - 400: missing fields, invalid address or undecodable PDF
/// - 413: body larger than the attachment limit
/// - 503: email could not be sent
pub async fn send_resume_email<S, E, I>(
    state: web::Data<AppState<S, E, I>>,
    request: web::Json<SendResumeEmailRequest>,
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
        .share_resume(request.into_inner().into())
        .await
    {
        Ok(message_id) => HttpResponse::Ok().json(EmailSentResponse {
            success: true,
            message: "Resume sent successfully!".to_string(),
            message_id,
        }),
        Err(error) => handle_domain_error(&error),
    }
}
