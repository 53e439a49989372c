//! Failure reasons of the one-time code checks

use thiserror::Error;

/// Why a supplied one-time code was not accepted
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpError {
    /// No live record: never issued, already consumed or swept away
    #[error("OTP not found or expired. Please request a new one.")]
    NotFoundOrExpired,

    /// The record existed but its expiry had passed; it has been deleted
    #[error("OTP has expired. Please request a new one.")]
    Expired,

    /// The supplied code differs from the outstanding one
    #[error("Invalid OTP. Please check and try again.")]
    Mismatch,
}

impl OtpError {
    pub fn code(&self) -> &'static str {
        match self {
            OtpError::NotFoundOrExpired => "OTP_NOT_FOUND",
            OtpError::Expired => "OTP_EXPIRED",
            OtpError::Mismatch => "OTP_MISMATCH",
        }
    }
}
