//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the password reset
//! workflow depends on.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Email**: SMTP delivery through `lettre` and a logging mailer for development
//! - **Identity**: Firebase Identity Toolkit REST client and an in-memory account store

pub mod email;
pub mod identity;

pub use email::{
    create_email_service, AttachmentInfo, LogEmailService, OutboundEmail, SmtpEmailService,
};
pub use identity::{create_identity_provider, FirebaseIdentityProvider, InMemoryIdentityProvider};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// SMTP transport error
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Malformed email address
    #[error("Invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Message could not be assembled
    #[error("Email build error: {0}")]
    Message(#[from] lettre::error::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Identity provider returned an error response
    #[error("Identity provider error ({status}): {message}")]
    Identity { status: u16, message: String },

    /// Account missing at the identity provider
    #[error("No user record for {0}")]
    UserNotFound(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
