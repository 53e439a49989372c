//! Types for password reset results

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Whether a code is sent for the first time or re-sent on request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeDispatch {
    Initial,
    Resend,
}

impl CodeDispatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeDispatch::Initial => "initial",
            CodeDispatch::Resend => "resend",
        }
    }
}

/// Result of sending a reset code
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// When the delivered code stops being accepted
    pub expires_at: DateTime<Utc>,
    /// Validity window at the time of issuance
    pub expires_in: Duration,
    /// The email message ID from the provider
    pub message_id: String,
    pub dispatch: CodeDispatch,
}

/// Result of a completed password reset
#[derive(Debug, Clone)]
pub struct ResetOutcome {
    /// When the new password was applied
    pub changed_at: DateTime<Utc>,
    /// Whether the confirmation email went out
    pub confirmation_sent: bool,
}
