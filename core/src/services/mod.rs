//! Business services containing domain logic and use cases.

pub mod outreach;
pub mod password_reset;

// Re-export commonly used types
pub use outreach::{
    decode_pdf_data, CandidateMessage, OutreachService, ResumeShare, ResumeSubmission,
};
pub use password_reset::{
    CodeDispatch, EmailServiceTrait, IdentityProviderTrait, OtpRegistry, OtpSweeper,
    PasswordResetConfig, PasswordResetService, ResetOutcome, SendCodeResult, SweeperHandle,
};
