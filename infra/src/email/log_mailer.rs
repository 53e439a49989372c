//! Logging email service for development and tests
//!
//! Messages are written to the log instead of being sent, and kept in an
//! in-memory outbox so callers can read back what would have been delivered.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use cc_core::{CandidateMessage, CodeDispatch, EmailServiceTrait, ResumeShare};
use cc_shared::utils::mask_email;

use super::templates::{self, EmailTemplate};

/// Copy of an email the logging service "sent"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub message_id: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    /// Reset code carried by the email, if any
    pub code: Option<String>,
    /// Display name replacing the default sender, if any
    pub sender_name: Option<String>,
    pub attachment: Option<AttachmentInfo>,
}

/// Name and size of an attached file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentInfo {
    pub filename: String,
    pub size: usize,
}

/// Extra envelope details for a logged email
#[derive(Default)]
struct Envelope<'a> {
    code: Option<&'a str>,
    sender_name: Option<String>,
    attachment: Option<AttachmentInfo>,
}

/// Email service that logs instead of sending
#[derive(Clone)]
pub struct LogEmailService {
    outbox: Arc<Mutex<Vec<OutboundEmail>>>,
    failing: Arc<AtomicBool>,
    code_ttl_minutes: i64,
}

impl LogEmailService {
    pub fn new(code_ttl_minutes: i64) -> Self {
        Self {
            outbox: Arc::new(Mutex::new(Vec::new())),
            failing: Arc::new(AtomicBool::new(false)),
            code_ttl_minutes,
        }
    }

    /// Make every following send fail, or succeed again
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Everything sent so far, oldest first
    pub fn outbox(&self) -> Vec<OutboundEmail> {
        self.lock_outbox().clone()
    }

    /// Most recent reset code sent to an address
    pub fn last_code_for(&self, email: &str) -> Option<String> {
        self.lock_outbox()
            .iter()
            .rev()
            .filter(|sent| sent.to == email)
            .find_map(|sent| sent.code.clone())
    }

    fn lock_outbox(&self) -> std::sync::MutexGuard<'_, Vec<OutboundEmail>> {
        self.outbox.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(
        &self,
        to: &str,
        template: EmailTemplate,
        envelope: Envelope<'_>,
    ) -> Result<String, String> {
        if self.failing.load(Ordering::SeqCst) {
            warn!(to = %mask_email(to), "Log mailer set to fail");
            return Err("Mail transport unavailable".to_string());
        }

        let message_id = format!("log-{}", uuid::Uuid::new_v4());

        info!(
            to = %mask_email(to),
            subject = %template.subject,
            message_id = %message_id,
            code = envelope.code.unwrap_or(""),
            attachment = envelope.attachment.as_ref().map(|a| a.filename.as_str()).unwrap_or(""),
            "[LOG MAILER] Email not sent, logged instead"
        );

        self.lock_outbox().push(OutboundEmail {
            message_id: message_id.clone(),
            to: to.to_string(),
            subject: template.subject,
            html: template.html,
            code: envelope.code.map(str::to_string),
            sender_name: envelope.sender_name,
            attachment: envelope.attachment,
        });

        Ok(message_id)
    }
}

impl Default for LogEmailService {
    fn default() -> Self {
        Self::new(cc_core::DEFAULT_TTL_MINUTES)
    }
}

#[async_trait]
impl EmailServiceTrait for LogEmailService {
    async fn send_reset_code(
        &self,
        email: &str,
        code: &str,
        dispatch: CodeDispatch,
    ) -> Result<String, String> {
        let template = templates::reset_code(code, dispatch, self.code_ttl_minutes);
        self.record(
            email,
            template,
            Envelope {
                code: Some(code),
                ..Envelope::default()
            },
        )
    }

    async fn send_password_changed(
        &self,
        email: &str,
        changed_at: DateTime<Utc>,
    ) -> Result<String, String> {
        self.record(email, templates::password_changed(changed_at), Envelope::default())
    }

    async fn send_account_deleted(
        &self,
        email: &str,
        user_name: &str,
        deleted_at: DateTime<Utc>,
    ) -> Result<String, String> {
        self.record(
            email,
            templates::account_deleted(user_name, deleted_at, None),
            Envelope::default(),
        )
    }

    async fn send_resume(&self, share: &ResumeShare) -> Result<String, String> {
        let template = templates::resume_shared(
            &share.sender_name,
            share.message.as_deref(),
            &share.filename,
        );
        self.record(
            &share.recipient_email,
            template,
            Envelope {
                sender_name: Some(format!("{} via CareerCatalyst", share.sender_name)),
                attachment: Some(AttachmentInfo {
                    filename: share.filename.clone(),
                    size: share.pdf.len(),
                }),
                ..Envelope::default()
            },
        )
    }

    async fn send_candidate_message(&self, message: &CandidateMessage) -> Result<String, String> {
        self.record(
            &message.to,
            templates::candidate_message(message),
            Envelope {
                sender_name: message.company.clone(),
                ..Envelope::default()
            },
        )
    }
}
