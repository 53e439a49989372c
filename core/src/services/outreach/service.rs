//! Resume sharing and candidate messaging

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;

use crate::errors::{DomainError, DomainResult};
use crate::services::password_reset::EmailServiceTrait;
use cc_shared::utils::{is_valid_email, mask_email};

use super::types::{CandidateMessage, ResumeShare, ResumeSubmission};

const RESUME_FIELDS_MESSAGE: &str =
    "Missing required fields: recipientEmail, senderName, pdfData, filename";
const CANDIDATE_FIELDS_MESSAGE: &str = "Missing required fields: to, subject, body";
const INVALID_ADDRESS_MESSAGE: &str = "Invalid email address";

/// Decode a base64 PDF payload
///
/// Accepts either bare base64 or a `data:application/pdf;base64,...` URL.
pub fn decode_pdf_data(pdf_data: &str) -> DomainResult<Vec<u8>> {
    let encoded = pdf_data
        .split_once(',')
        .map(|(_, data)| data)
        .unwrap_or(pdf_data)
        .trim();

    match STANDARD.decode(encoded) {
        Ok(bytes) if !bytes.is_empty() => Ok(bytes),
        _ => Err(DomainError::Validation {
            message: "Invalid PDF data".to_string(),
        }),
    }
}

/// Sends resumes and employer messages through the configured mailer
pub struct OutreachService<E: EmailServiceTrait + ?Sized> {
    email_service: Arc<E>,
}

impl<E: EmailServiceTrait + ?Sized> OutreachService<E> {
    pub fn new(email_service: Arc<E>) -> Self {
        Self { email_service }
    }

    /// Email a resume PDF to a recipient
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Message id from the mailer
    /// * `Err(DomainError)` - Missing fields, bad address, bad PDF data or delivery failure
    pub async fn share_resume(&self, submission: ResumeSubmission) -> DomainResult<String> {
        Self::require(
            RESUME_FIELDS_MESSAGE,
            &[
                &submission.recipient_email,
                &submission.sender_name,
                &submission.pdf_data,
                &submission.filename,
            ],
        )?;
        Self::check_address(&submission.recipient_email)?;

        let share = ResumeShare {
            pdf: decode_pdf_data(&submission.pdf_data)?,
            recipient_email: submission.recipient_email.trim().to_string(),
            sender_name: submission.sender_name.trim().to_string(),
            message: submission
                .message
                .map(|message| message.trim().to_string())
                .filter(|message| !message.is_empty()),
            filename: submission.filename.trim().to_string(),
        };

        let message_id = self.email_service.send_resume(&share).await.map_err(|e| {
            tracing::error!(
                to = %mask_email(&share.recipient_email),
                error = %e,
                event = "resume_delivery_failed",
                "Failed to send resume email"
            );
            DomainError::Delivery {
                message: format!("Failed to send resume email: {}", e),
            }
        })?;

        tracing::info!(
            to = %mask_email(&share.recipient_email),
            message_id = %message_id,
            attachment_bytes = share.pdf.len(),
            event = "resume_sent",
            "Resume email delivered"
        );

        Ok(message_id)
    }

    /// Email a message from an employer to a candidate
    pub async fn contact_candidate(&self, message: CandidateMessage) -> DomainResult<String> {
        Self::require(
            CANDIDATE_FIELDS_MESSAGE,
            &[&message.to, &message.subject, &message.body],
        )?;
        Self::check_address(&message.to)?;

        let message = CandidateMessage {
            to: message.to.trim().to_string(),
            company: non_blank(message.company),
            job_title: non_blank(message.job_title),
            candidate_name: non_blank(message.candidate_name),
            ..message
        };

        let message_id = self
            .email_service
            .send_candidate_message(&message)
            .await
            .map_err(|e| {
                tracing::error!(
                    to = %mask_email(&message.to),
                    error = %e,
                    event = "candidate_delivery_failed",
                    "Failed to send candidate email"
                );
                DomainError::Delivery {
                    message: format!("Failed to send candidate email: {}", e),
                }
            })?;

        tracing::info!(
            to = %mask_email(&message.to),
            message_id = %message_id,
            event = "candidate_email_sent",
            "Candidate email delivered"
        );

        Ok(message_id)
    }

    fn check_address(email: &str) -> DomainResult<()> {
        if is_valid_email(email.trim()) {
            Ok(())
        } else {
            Err(DomainError::Validation {
                message: INVALID_ADDRESS_MESSAGE.to_string(),
            })
        }
    }

    fn require(message: &str, fields: &[&str]) -> DomainResult<()> {
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(DomainError::Validation {
                message: message.to_string(),
            });
        }
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
