//! Email Service Module
//!
//! Delivery of reset codes, account notices and outreach emails.
//!
//! ## Features
//!
//! - **SMTP**: Production delivery through an authenticated relay
//! - **Log mailer**: Log output and an in-memory outbox for development
//! - **Templates**: HTML bodies shared by every provider

use std::sync::Arc;

use cc_core::EmailServiceTrait;
use cc_shared::config::{MailConfig, MailProvider};

pub mod log_mailer;
pub mod smtp;
pub mod templates;

pub use log_mailer::{AttachmentInfo, LogEmailService, OutboundEmail};
pub use smtp::SmtpEmailService;
pub use templates::EmailTemplate;

use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create an email service based on configuration
///
/// # Arguments
///
/// * `config` - Mail configuration containing provider settings
/// * `code_ttl_minutes` - Lifetime stated in reset code emails
pub fn create_email_service(
    config: &MailConfig,
    code_ttl_minutes: i64,
) -> Result<Arc<dyn EmailServiceTrait>, InfrastructureError> {
    match config.provider {
        MailProvider::Smtp => Ok(Arc::new(SmtpEmailService::new(config, code_ttl_minutes)?)),
        MailProvider::Log => {
            tracing::warn!("Using log mailer; emails will not be delivered");
            Ok(Arc::new(LogEmailService::new(code_ttl_minutes)))
        }
    }
}
