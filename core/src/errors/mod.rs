//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::OtpError;

use thiserror::Error;

use crate::domain::value_objects::PasswordRule;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("No account found with this email")]
    AccountNotFound,

    #[error(transparent)]
    Otp(#[from] OtpError),

    #[error("Password does not meet security requirements")]
    WeakPassword { unmet: Vec<PasswordRule> },

    #[error("Email delivery failed: {message}")]
    Delivery { message: String },

    #[error("Identity provider error: {message}")]
    Provider { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Stable machine-readable code for API clients
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => "VALIDATION_ERROR",
            DomainError::AccountNotFound => "ACCOUNT_NOT_FOUND",
            DomainError::Otp(otp) => otp.code(),
            DomainError::WeakPassword { .. } => "WEAK_PASSWORD",
            DomainError::Delivery { .. } => "DELIVERY_FAILED",
            DomainError::Provider { .. } => "PROVIDER_FAILED",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Messages for the unmet password rules, empty for other errors
    pub fn requirements(&self) -> Vec<String> {
        match self {
            DomainError::WeakPassword { unmet } => {
                unmet.iter().map(|rule| rule.message().to_string()).collect()
            }
            _ => Vec::new(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
