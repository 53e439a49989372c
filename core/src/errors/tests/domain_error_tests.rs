use crate::domain::value_objects::PasswordRule;
use crate::errors::{DomainError, OtpError};

#[test]
fn test_otp_error_bridges_into_domain_error() {
    let error: DomainError = OtpError::Mismatch.into();
    assert!(matches!(error, DomainError::Otp(OtpError::Mismatch)));
    assert_eq!(error.code(), "OTP_MISMATCH");
    assert_eq!(error.to_string(), "Invalid OTP. Please check and try again.");
}

#[test]
fn test_error_codes_are_distinct() {
    let errors = vec![
        DomainError::Validation { message: "Email is required".to_string() },
        DomainError::AccountNotFound,
        DomainError::Otp(OtpError::NotFoundOrExpired),
        DomainError::Otp(OtpError::Expired),
        DomainError::Otp(OtpError::Mismatch),
        DomainError::WeakPassword { unmet: vec![PasswordRule::MinLength] },
        DomainError::Delivery { message: "smtp down".to_string() },
        DomainError::Provider { message: "503".to_string() },
        DomainError::Internal { message: "poisoned".to_string() },
    ];

    let codes: std::collections::HashSet<&str> = errors.iter().map(|e| e.code()).collect();
    assert_eq!(codes.len(), errors.len());
}

#[test]
fn test_weak_password_lists_requirements() {
    let error = DomainError::WeakPassword {
        unmet: vec![PasswordRule::MinLength, PasswordRule::Digit],
    };

    assert_eq!(
        error.requirements(),
        vec![
            "Password must be at least 8 characters long".to_string(),
            "Password must contain at least one number".to_string(),
        ]
    );
    assert!(DomainError::AccountNotFound.requirements().is_empty());
}

#[test]
fn test_messages() {
    assert_eq!(
        DomainError::AccountNotFound.to_string(),
        "No account found with this email"
    );
    assert_eq!(
        DomainError::Otp(OtpError::NotFoundOrExpired).to_string(),
        "OTP not found or expired. Please request a new one."
    );
    assert_eq!(
        DomainError::Delivery { message: "timeout".to_string() }.to_string(),
        "Email delivery failed: timeout"
    );
}
