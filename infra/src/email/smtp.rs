//! SMTP Email Service Implementation
//!
//! Sends HTML email through an authenticated SMTP relay using `lettre`'s
//! async Tokio transport. Port 465 uses implicit TLS; any other port upgrades
//! the connection with STARTTLS.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lettre::message::{header::ContentType, Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use tracing::{debug, error, info};

use cc_core::{CandidateMessage, CodeDispatch, EmailServiceTrait, ResumeShare};
use cc_shared::config::MailConfig;
use cc_shared::utils::mask_email;

use super::templates::{self, EmailTemplate};
use crate::InfrastructureError;

/// Port on which the relay expects implicit TLS
const IMPLICIT_TLS_PORT: u16 = 465;

/// File attached to an outgoing message
struct PdfAttachment<'a> {
    filename: &'a str,
    content: &'a [u8],
}

/// Email service backed by an SMTP relay
pub struct SmtpEmailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    support_address: String,
    code_ttl_minutes: i64,
}

impl SmtpEmailService {
    /// Build the transport from configuration
    ///
    /// No connection is opened until the first message is sent.
    pub fn new(config: &MailConfig, code_ttl_minutes: i64) -> Result<Self, InfrastructureError> {
        let username = config
            .username
            .clone()
            .ok_or_else(|| InfrastructureError::Config("EMAIL_USER not set".to_string()))?;
        let password = config
            .password
            .clone()
            .ok_or_else(|| InfrastructureError::Config("EMAIL_PASS not set".to_string()))?;
        let sender = config
            .sender_address()
            .ok_or_else(|| InfrastructureError::Config("No sender address configured".to_string()))?
            .to_string();

        let from = Mailbox::new(Some(config.from_name.clone()), sender.parse()?);

        let builder = if config.smtp_port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
        };

        let transport = builder
            .port(config.smtp_port)
            .credentials(Credentials::new(username, password))
            .timeout(Some(Duration::from_secs(config.timeout_secs)))
            .build();

        info!(
            host = %config.smtp_host,
            port = config.smtp_port,
            "SMTP email service initialized"
        );

        Ok(Self {
            transport,
            from,
            support_address: sender,
            code_ttl_minutes,
        })
    }

    /// Mailbox on the configured address with a different display name
    fn sender_as(&self, display_name: String) -> Mailbox {
        Mailbox::new(Some(display_name), self.from.email.clone())
    }

    /// Send a rendered template and return the generated Message-ID
    async fn deliver(&self, to: &str, template: EmailTemplate) -> Result<String, InfrastructureError> {
        self.deliver_from(self.from.clone(), to, template, None).await
    }

    async fn deliver_from(
        &self,
        from: Mailbox,
        to: &str,
        template: EmailTemplate,
        attachment: Option<PdfAttachment<'_>>,
    ) -> Result<String, InfrastructureError> {
        let message_id = format!("<{}@careercatalyst>", uuid::Uuid::new_v4());

        let builder = Message::builder()
            .from(from)
            .to(to.parse()?)
            .subject(template.subject)
            .message_id(Some(message_id.clone()));

        let message = match attachment {
            Some(attachment) => {
                let pdf_type = ContentType::parse("application/pdf")
                    .map_err(|e| InfrastructureError::General(e.to_string()))?;
                builder.multipart(
                    MultiPart::mixed()
                        .singlepart(SinglePart::html(template.html))
                        .singlepart(
                            Attachment::new(attachment.filename.to_string())
                                .body(attachment.content.to_vec(), pdf_type),
                        ),
                )?
            }
            None => builder.header(ContentType::TEXT_HTML).body(template.html)?,
        };

        let response = self.transport.send(message).await.map_err(|e| {
            error!(to = %mask_email(to), error = %e, "SMTP delivery failed");
            e
        })?;

        debug!(
            to = %mask_email(to),
            code = %response.code(),
            message_id = %message_id,
            "SMTP relay accepted message"
        );

        Ok(message_id)
    }
}

#[async_trait]
impl EmailServiceTrait for SmtpEmailService {
    async fn send_reset_code(
        &self,
        email: &str,
        code: &str,
        dispatch: CodeDispatch,
    ) -> Result<String, String> {
        let template = templates::reset_code(code, dispatch, self.code_ttl_minutes);
        self.deliver(email, template).await.map_err(|e| e.to_string())
    }

    async fn send_password_changed(
        &self,
        email: &str,
        changed_at: DateTime<Utc>,
    ) -> Result<String, String> {
        let template = templates::password_changed(changed_at);
        self.deliver(email, template).await.map_err(|e| e.to_string())
    }

    async fn send_account_deleted(
        &self,
        email: &str,
        user_name: &str,
        deleted_at: DateTime<Utc>,
    ) -> Result<String, String> {
        let template =
            templates::account_deleted(user_name, deleted_at, Some(&self.support_address));
        self.deliver(email, template).await.map_err(|e| e.to_string())
    }

    async fn send_resume(&self, share: &ResumeShare) -> Result<String, String> {
        let template = templates::resume_shared(
            &share.sender_name,
            share.message.as_deref(),
            &share.filename,
        );
        let from_name = match &self.from.name {
            Some(brand) => format!("{} via {}", share.sender_name, brand),
            None => share.sender_name.clone(),
        };
        let attachment = PdfAttachment {
            filename: &share.filename,
            content: &share.pdf,
        };

        self.deliver_from(
            self.sender_as(from_name),
            &share.recipient_email,
            template,
            Some(attachment),
        )
        .await
        .map_err(|e| e.to_string())
    }

    async fn send_candidate_message(&self, message: &CandidateMessage) -> Result<String, String> {
        let from = match &message.company {
            Some(company) => self.sender_as(company.clone()),
            None => self.from.clone(),
        };

        self.deliver_from(from, &message.to, templates::candidate_message(message), None)
            .await
            .map_err(|e| e.to_string())
    }
}
