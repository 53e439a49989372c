use serde::{Deserialize, Serialize};
use validator::Validate;

use cc_core::{CandidateMessage, ResumeSubmission};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendResumeEmailRequest {
    #[serde(default)]
    #[validate(length(
        min = 1,
        message = "Missing required fields: recipientEmail, senderName, pdfData, filename"
    ))]
    pub recipient_email: String,

    #[serde(default)]
    #[validate(length(
        min = 1,
        message = "Missing required fields: recipientEmail, senderName, pdfData, filename"
    ))]
    pub sender_name: String,

    #[serde(default)]
    pub message: Option<String>,

    /// Base64 PDF, bare or as a data URL
    #[serde(default)]
    #[validate(length(
        min = 1,
        message = "Missing required fields: recipientEmail, senderName, pdfData, filename"
    ))]
    pub pdf_data: String,

    #[serde(default)]
    #[validate(length(
        min = 1,
        message = "Missing required fields: recipientEmail, senderName, pdfData, filename"
    ))]
    pub filename: String,
}

impl From<SendResumeEmailRequest> for ResumeSubmission {
    fn from(request: SendResumeEmailRequest) -> Self {
        Self {
            recipient_email: request.recipient_email,
            sender_name: request.sender_name,
            message: request.message,
            pdf_data: request.pdf_data,
            filename: request.filename,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendCandidateEmailRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields: to, subject, body"))]
    pub to: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields: to, subject, body"))]
    pub subject: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields: to, subject, body"))]
    pub body: String,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(default)]
    pub job_title: Option<String>,

    #[serde(default)]
    pub candidate_name: Option<String>,
}

impl From<SendCandidateEmailRequest> for CandidateMessage {
    fn from(request: SendCandidateEmailRequest) -> Self {
        Self {
            to: request.to,
            subject: request.subject,
            body: request.body,
            company: request.company,
            job_title: request.job_title,
            candidate_name: request.candidate_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSentResponse {
    pub success: bool,
    pub message: String,
    pub message_id: String,
}
